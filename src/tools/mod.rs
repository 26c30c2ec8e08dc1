pub mod equip;
pub mod r#trait;
pub mod upgrade_points;
