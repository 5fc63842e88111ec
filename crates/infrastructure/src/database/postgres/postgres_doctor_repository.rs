use async_trait::async_trait;
use medgen_domain::{Doctor, DoctorRepository, MedgenResult};
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_doctor(row: &sqlx::postgres::PgRow) -> MedgenResult<Doctor> {
        Ok(Doctor {
            id: row.try_get("doctor_id")?,
            name: row.try_get("name")?,
            max_workload: row.try_get("max_workload")?,
            status: row.try_get("current_status")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    #[instrument(skip(self, doctor), fields(doctor_name = %doctor.name))]
    async fn create(&self, doctor: &Doctor) -> MedgenResult<Doctor> {
        let row = sqlx::query(
            r#"
            INSERT INTO doctors (name, max_workload, current_status)
            VALUES ($1, $2, $3)
            RETURNING doctor_id, name, max_workload, current_status, created_at
            "#,
        )
        .bind(&doctor.name)
        .bind(doctor.max_workload)
        .bind(doctor.status)
        .fetch_one(&self.pool)
        .await?;

        let created = Self::row_to_doctor(&row)?;
        debug!("插入医生成功: {} (ID: {})", created.name, created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> MedgenResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM doctors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
