#![recursion_limit = "1024"]

pub mod analytics;
mod app;
pub mod bootstrap;
pub mod calibrate;
mod page;
pub mod store;

pub use app::{CalibrationRoute, Shell, ShellProps};
pub use bootstrap::{bootstrap, start, when_loaded, BootConfig, BootError};
