//! 基础数据播种
//!
//! 一次性插入固定的医生名册和随机生成的患者档案，
//! 为两个任务生成器提供可引用的实体。

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, error, info};

use medgen_config::SeedConfig;
use medgen_domain::{Doctor, DoctorRepository, DoctorStatus, MedgenResult, Patient, PatientRepository};

/// 固定的医生名册（姓名、最大工作量、状态）
const DOCTOR_ROSTER: [(&str, i32, DoctorStatus); 5] = [
    ("Dr. Amelia Reid", 8, DoctorStatus::Available),
    ("Dr. Ben Carter", 5, DoctorStatus::Available),
    ("Dr. Chloe Davis", 6, DoctorStatus::Available),
    ("Dr. Ethan Hall", 7, DoctorStatus::OnLeave),
    ("Dr. Fiona King", 4, DoctorStatus::Available),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub doctors_inserted: usize,
    pub patients_inserted: usize,
    pub failed: usize,
}

pub struct DataSeeder {
    doctor_repo: Arc<dyn DoctorRepository>,
    patient_repo: Arc<dyn PatientRepository>,
    config: SeedConfig,
}

impl DataSeeder {
    pub fn new(
        doctor_repo: Arc<dyn DoctorRepository>,
        patient_repo: Arc<dyn PatientRepository>,
        config: SeedConfig,
    ) -> Self {
        Self {
            doctor_repo,
            patient_repo,
            config,
        }
    }

    /// 播种全部基础数据
    ///
    /// 每条插入是独立的工作单元：单条失败记录日志后继续下一条。
    pub async fn seed_all(&self) -> MedgenResult<SeedSummary> {
        info!("开始播种基础数据");
        let mut summary = SeedSummary::default();

        for (name, max_workload, status) in DOCTOR_ROSTER {
            let doctor = Doctor::new(name.to_string(), max_workload, status);
            match self.doctor_repo.create(&doctor).await {
                Ok(created) => {
                    summary.doctors_inserted += 1;
                    debug!("医生已插入: {} (ID: {})", created.name, created.id);
                }
                Err(e) => {
                    summary.failed += 1;
                    error!("插入医生 {} 失败: {}", name, e);
                }
            }
        }

        for index in 1..=self.config.patient_count {
            let patient = Self::build_patient(index);
            match self.patient_repo.create(&patient).await {
                Ok(created) => {
                    summary.patients_inserted += 1;
                    debug!("患者已插入: {} (ID: {})", created.name, created.id);
                }
                Err(e) => {
                    summary.failed += 1;
                    error!("插入患者 {} 失败: {}", patient.name, e);
                }
            }
        }

        let doctor_total = self.doctor_repo.count().await?;
        let patient_total = self.patient_repo.count().await?;
        info!(
            "播种完成: 新增医生 {} 名, 患者 {} 名, 失败 {} 条 (库中共 {} 名医生 / {} 名患者)",
            summary.doctors_inserted, summary.patients_inserted, summary.failed,
            doctor_total, patient_total,
        );

        Ok(summary)
    }

    fn build_patient(index: usize) -> Patient {
        let mut rng = rand::rng();
        let severity = rng.random_range(1..=10);
        let vitals = format!(
            "Temp: {:.1}, BP: {}/{}",
            rng.random_range(36.0..37.5),
            rng.random_range(110..=140),
            rng.random_range(70..=90),
        );
        Patient::new(format!("Patient {index:02}"), severity, vitals)
    }
}
