pub use rusb;
pub mod commands;
pub mod devices;
pub mod error;
pub mod switcher;

pub mod device;
