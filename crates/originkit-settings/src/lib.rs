//! OriginKit Settings Crate
//!
//! Job configuration persistence: TOML files in the platform config
//! directory, validated on load.

pub mod config;
pub mod error;

pub use config::JobConfig;
pub use error::{SettingsError, SettingsResult};
