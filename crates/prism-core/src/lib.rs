//! Shared domain types and configuration for the PRISM sourcing pipeline.

pub mod app_config;
pub mod config;
pub mod record;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use record::{ListingQuality, Potential, PrismScore, ProductRecord, NOT_FOUND};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
