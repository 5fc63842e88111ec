//! 配置加载与校验
//!
//! 所有连接地址、批次大小、间隔等可调参数都通过显式配置结构
//! 在构造组件时注入，生成逻辑中不出现硬编码字面量。
//! 配置来源：TOML 文件 + `MEDGEN_*` 环境变量覆盖。

pub mod models;
pub mod validation;

pub use models::{
    ApiConfig, AppConfig, DatabaseConfig, GeneratorConfig, HistoryConfig, SeedConfig,
    StreamerConfig,
};
pub use validation::{ConfigValidator, ValidationUtils};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载失败: {0}")]
    Load(#[from] config::ConfigError),
    #[error("配置验证失败: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
