pub mod api;
pub mod app_config;
pub mod database;
pub mod generator;

pub use api::ApiConfig;
pub use app_config::AppConfig;
pub use database::DatabaseConfig;
pub use generator::{GeneratorConfig, HistoryConfig, SeedConfig, StreamerConfig};
