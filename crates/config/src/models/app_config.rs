use std::path::Path;

use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use super::{api::ApiConfig, database::DatabaseConfig, generator::GeneratorConfig};
use crate::validation::ConfigValidator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub generator: GeneratorConfig,
    pub api: ApiConfig,
}

impl AppConfig {
    /// 加载配置：TOML 文件 + `MEDGEN_*` 环境变量覆盖
    ///
    /// 未指定路径时依次尝试默认位置，全部缺失则退回内置默认值。
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {path}"));
            }
        } else {
            let default_paths = ["config/medgen.toml", "/etc/medgen/medgen.toml"];
            for path in default_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                    break;
                }
            }
        }

        // 环境变量覆盖，例如 MEDGEN_DATABASE__URL
        builder = builder.add_source(Environment::with_prefix("MEDGEN").separator("__"));

        let settings = builder.build().context("构建配置失败")?;
        let config: AppConfig = settings.try_deserialize().context("解析配置失败")?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("配置验证失败: {e}"))?;

        Ok(config)
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.database.validate()?;
        self.generator.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml_str = r#"
            [database]
            url = "postgresql://db.internal:5432/medgen"
            max_connections = 20
            min_connections = 2
            connection_timeout_seconds = 10
            idle_timeout_seconds = 300

            [generator.streamer]
            enabled = false
            interval_seconds = 5
            emergency_rate = 0.1
        "#;

        let config: AppConfig = toml::from_str(toml_str).expect("Failed to parse");

        assert_eq!(config.database.max_connections, 20);
        assert!(!config.generator.streamer.enabled);
        assert_eq!(config.generator.streamer.interval_seconds, 5);
        // 未出现的配置段使用默认值
        assert_eq!(config.generator.history.batch_size, 200);
        assert!(config.api.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_missing_explicit_path() {
        let result = AppConfig::load(Some("/nonexistent/medgen.toml"));
        assert!(result.is_err());
    }
}
