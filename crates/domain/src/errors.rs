use thiserror::Error;

use crate::entities::EntityKind;

#[derive(Error, Debug, Clone)]
pub enum MedgenError {
    #[error("数据库操作失败: {0}")]
    DatabaseOperation(String),
    #[error("未知的实体类型: {0}")]
    UnknownEntityKind(String),
    #[error("实体 {kind} 的标识符列表为空，无法继续生成")]
    EmptyPopulation { kind: EntityKind },
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("数据序列化错误: {0}")]
    Serialization(String),
    #[error("数据验证失败: {0}")]
    ValidationError(String),
    #[error("系统内部错误: {0}")]
    Internal(String),
}

pub type MedgenResult<T> = Result<T, MedgenError>;

impl MedgenError {
    pub fn database_error<S: Into<String>>(msg: S) -> Self {
        Self::DatabaseOperation(msg.into())
    }
    pub fn unknown_entity_kind<S: Into<String>>(kind: S) -> Self {
        Self::UnknownEntityKind(kind.into())
    }
    pub fn empty_population(kind: EntityKind) -> Self {
        Self::EmptyPopulation { kind }
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }
    /// 空数据集是软失败：调用方记录日志并放弃本次操作，而不是让进程崩溃
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            MedgenError::EmptyPopulation { .. } | MedgenError::DatabaseOperation(_)
        )
    }
}

impl From<sqlx::Error> for MedgenError {
    fn from(err: sqlx::Error) -> Self {
        MedgenError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MedgenError {
    fn from(err: serde_json::Error) -> Self {
        MedgenError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for MedgenError {
    fn from(err: anyhow::Error) -> Self {
        MedgenError::Internal(err.to_string())
    }
}
