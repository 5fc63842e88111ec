use serde::{Deserialize, Serialize};

use crate::validation::{ConfigValidator, ValidationUtils};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: SeedConfig,
    pub history: HistoryConfig,
    pub streamer: StreamerConfig,
}

impl ConfigValidator for GeneratorConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        self.seed.validate()?;
        self.history.validate()?;
        self.streamer.validate()?;
        Ok(())
    }
}

/// 基础数据播种配置（医生名册固定，患者数量可调）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub patient_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { patient_count: 20 }
    }
}

impl ConfigValidator for SeedConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_count(self.patient_count, "generator.seed.patient_count")
    }
}

/// 历史任务批次配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// 批次总任务数
    pub batch_size: usize,
    /// 其中常规周期任务的数量
    pub routine_count: usize,
    /// 回溯时间窗口（天）
    pub span_days: i64,
    /// 急诊标记的伯努利概率
    pub emergency_rate: f64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            batch_size: 200,
            routine_count: 50,
            span_days: 90,
            emergency_rate: 0.05,
        }
    }
}

impl ConfigValidator for HistoryConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_count(self.batch_size, "generator.history.batch_size")?;
        ValidationUtils::validate_probability(
            self.emergency_rate,
            "generator.history.emergency_rate",
        )?;

        if self.routine_count > self.batch_size {
            return Err(crate::ConfigError::Validation(
                "generator.history.routine_count must not exceed batch_size".to_string(),
            ));
        }
        // 周期任务按周排布，窗口必须至少容纳一周
        if self.span_days < 7 {
            return Err(crate::ConfigError::Validation(
                "generator.history.span_days must be at least 7".to_string(),
            ));
        }

        Ok(())
    }
}

/// 实时任务流配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamerConfig {
    pub enabled: bool,
    /// 两次插入之间的固定间隔（秒）
    pub interval_seconds: u64,
    pub emergency_rate: f64,
}

impl Default for StreamerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 30,
            emergency_rate: 0.03,
        }
    }
}

impl ConfigValidator for StreamerConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_timeout_seconds(
            self.interval_seconds,
            "generator.streamer.interval_seconds",
        )?;
        ValidationUtils::validate_probability(
            self.emergency_rate,
            "generator.streamer.emergency_rate",
        )?;
        Ok(())
    }
}
