//! Shared data model and runtime configuration for the shopsight workspace.

pub mod app_config;
pub mod config;
pub mod profile;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{
    ContactDetails, Faq, HeroProduct, ImportantLink, LinkCategory, PriceRange, Product,
    SocialLink, StoreProfile,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
