pub mod input;
pub mod log_buffer;
pub mod ocr;
pub mod ocr_parser;
pub mod screen_capture;
pub mod window;
pub mod worker;
