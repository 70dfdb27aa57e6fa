//! Session wiring: configuration and the per-session state container

pub mod config;
pub mod state;

pub use config::Config;
pub use state::Session;
