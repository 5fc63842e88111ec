use async_trait::async_trait;
use medgen_domain::{MedgenResult, Patient, PatientRepository};
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

pub struct PostgresPatientRepository {
    pool: PgPool,
}

impl PostgresPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_patient(row: &sqlx::postgres::PgRow) -> MedgenResult<Patient> {
        Ok(Patient {
            id: row.try_get("patient_id")?,
            name: row.try_get("name")?,
            condition_severity: row.try_get("condition_severity")?,
            latest_vitals: row.try_get("latest_vitals")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl PatientRepository for PostgresPatientRepository {
    #[instrument(skip(self, patient), fields(patient_name = %patient.name))]
    async fn create(&self, patient: &Patient) -> MedgenResult<Patient> {
        let row = sqlx::query(
            r#"
            INSERT INTO patient_data (name, condition_severity, latest_vitals)
            VALUES ($1, $2, $3)
            RETURNING patient_id, name, condition_severity, latest_vitals, created_at
            "#,
        )
        .bind(&patient.name)
        .bind(patient.condition_severity)
        .bind(&patient.latest_vitals)
        .fetch_one(&self.pool)
        .await?;

        let created = Self::row_to_patient(&row)?;
        debug!("插入患者成功: {} (ID: {})", created.name, created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> MedgenResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patient_data")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
