//! Application configuration

mod app_config;

pub use app_config::{
    AccessSettings, AppConfig, JwtSettings, LogFormat, LoggingConfig, SeedUser, ServerConfig,
};
