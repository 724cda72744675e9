mod catalog;
mod config;
mod panel;

pub use catalog::default_catalog;
pub use config::{Config, LOG_ENV};
pub use panel::Panel;
