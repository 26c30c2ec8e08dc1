pub mod app_header;
pub mod flow_layout;
pub mod help;
pub mod log_panel;
pub mod picker;
pub mod status;
pub mod tiles;
