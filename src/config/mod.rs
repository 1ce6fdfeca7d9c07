//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, DemoConfig, JwtSettings, LogFormat, LoggingConfig, ServerConfig, TransferConfig,
};
