//! 基础设施层
//!
//! 领域仓储与标识符解析的 PostgreSQL 实现。

pub mod database;

pub use database::postgres::{
    PgIdentifierResolver, PostgresDoctorRepository, PostgresPatientRepository,
    PostgresTaskRepository,
};
