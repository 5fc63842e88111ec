//! 领域仓储抽象
//!
//! 定义数据访问的抽象接口，遵循依赖倒置原则

use async_trait::async_trait;

use crate::entities::{ClinicalTask, Doctor, EntityKind, Patient, TaskStatus};
use crate::errors::MedgenResult;

/// 医生仓储抽象
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn create(&self, doctor: &Doctor) -> MedgenResult<Doctor>;
    async fn count(&self) -> MedgenResult<i64>;
}

/// 患者仓储抽象
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn create(&self, patient: &Patient) -> MedgenResult<Patient>;
    async fn count(&self) -> MedgenResult<i64>;
}

/// 任务仓储抽象
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: &ClinicalTask) -> MedgenResult<ClinicalTask>;
    async fn count_by_status(&self, status: TaskStatus) -> MedgenResult<i64>;
}

/// 标识符解析抽象
///
/// 返回指定实体类型当前全部标识符的有序列表；
/// 表可达但为空时返回空列表而不是错误，由调用方决定是否放弃后续操作。
#[async_trait]
pub trait IdentifierResolver: Send + Sync {
    async fn resolve(&self, kind: EntityKind) -> MedgenResult<Vec<i64>>;
}
