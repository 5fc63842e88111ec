//! 医疗任务生成系统的领域层
//!
//! 定义核心实体（医生、患者、临床任务）、实体类型映射、
//! 错误分类以及数据访问的抽象接口。

pub mod entities;
pub mod errors;
pub mod repositories;

pub use entities::{ClinicalTask, Doctor, DoctorStatus, EntityKind, Patient, TaskStatus};
pub use errors::{MedgenError, MedgenResult};
pub use repositories::{DoctorRepository, IdentifierResolver, PatientRepository, TaskRepository};
