pub mod config;
pub mod panel;

pub use config::*;
pub use panel::*;
