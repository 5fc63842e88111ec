use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::MedgenError;

/// 实体类型，携带其表名与主键列名的声明式映射
///
/// 历史遗留的数据库结构为每个实体使用不同的主键列名
/// （`doctors.doctor_id` / `patient_data.patient_id`），
/// 标识符解析必须通过这里的映射，而不是按表名分支。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityKind {
    #[serde(rename = "doctor")]
    Doctor,
    #[serde(rename = "patient")]
    Patient,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Doctor, EntityKind::Patient];

    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Doctor => "doctors",
            EntityKind::Patient => "patient_data",
        }
    }

    pub fn id_column(&self) -> &'static str {
        match self {
            EntityKind::Doctor => "doctor_id",
            EntityKind::Patient => "patient_id",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Doctor => write!(f, "doctor"),
            EntityKind::Patient => write!(f, "patient"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = MedgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doctor" | "doctors" => Ok(EntityKind::Doctor),
            "patient" | "patients" | "patient_data" => Ok(EntityKind::Patient),
            other => Err(MedgenError::unknown_entity_kind(other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub max_workload: i32,
    pub status: DoctorStatus,
    pub created_at: DateTime<Utc>,
}

impl Doctor {
    pub fn new(name: String, max_workload: i32, status: DoctorStatus) -> Self {
        Self {
            id: 0, // 将由数据库生成
            name,
            max_workload,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, DoctorStatus::Available)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DoctorStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl sqlx::Type<sqlx::Postgres> for DoctorStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("VARCHAR")
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for DoctorStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        match s {
            "Available" => Ok(DoctorStatus::Available),
            "On Leave" => Ok(DoctorStatus::OnLeave),
            _ => Err(format!("Invalid doctor status: {s}").into()),
        }
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for DoctorStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        let s = match self {
            DoctorStatus::Available => "Available",
            DoctorStatus::OnLeave => "On Leave",
        };
        <&str as sqlx::Encode<sqlx::Postgres>>::encode(s, buf)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub condition_severity: i32,
    pub latest_vitals: String,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    pub fn new(name: String, condition_severity: i32, latest_vitals: String) -> Self {
        Self {
            id: 0, // 将由数据库生成
            name,
            condition_severity,
            latest_vitals,
            created_at: Utc::now(),
        }
    }
}

/// 临床任务
///
/// 由历史批次生成器或实时任务流产生，插入后不再修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalTask {
    pub id: i64,
    pub description: String,
    pub task_type: String, // "Admin", "Consult", "Alert" 等固定词表
    pub patient_id: i64,
    pub doctor_id: Option<i64>,
    pub urgency_score: f64,
    pub priority_score: f64,
    pub proactive_score: f64,
    pub scheduled_time: DateTime<Utc>,
    pub status: TaskStatus,
    pub is_emergency: bool,
    pub created_at: DateTime<Utc>,
}

impl ClinicalTask {
    /// 构造一条已完成的历史任务，评分由调用方给定
    #[allow(clippy::too_many_arguments)]
    pub fn historical(
        description: String,
        task_type: String,
        patient_id: i64,
        doctor_id: i64,
        urgency_score: f64,
        priority_score: f64,
        proactive_score: f64,
        scheduled_time: DateTime<Utc>,
        is_emergency: bool,
    ) -> Self {
        Self {
            id: 0, // 将由数据库生成
            description,
            task_type,
            patient_id,
            doctor_id: Some(doctor_id),
            urgency_score,
            priority_score,
            proactive_score,
            scheduled_time,
            status: TaskStatus::Complete,
            is_emergency,
            created_at: Utc::now(),
        }
    }

    /// 构造一条待处理的流式任务，评分默认 0.0，等待外部模型计算
    pub fn pending(
        description: String,
        task_type: String,
        patient_id: i64,
        scheduled_time: DateTime<Utc>,
        is_emergency: bool,
    ) -> Self {
        Self {
            id: 0, // 将由数据库生成
            description,
            task_type,
            patient_id,
            doctor_id: None,
            urgency_score: 0.0,
            priority_score: 0.0,
            proactive_score: 0.0,
            scheduled_time,
            status: TaskStatus::Pending,
            is_emergency,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, TaskStatus::Pending)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, TaskStatus::Complete)
    }

    pub fn entity_description(&self) -> String {
        format!(
            "任务 '{}' (ID: {}, 类型: {})",
            self.description, self.id, self.task_type
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Complete")]
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Complete => "Complete",
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for TaskStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("VARCHAR")
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for TaskStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "Complete" => Ok(TaskStatus::Complete),
            _ => Err(format!("Invalid task status: {s}").into()),
        }
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for TaskStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode(self.as_str(), buf)
    }
}
