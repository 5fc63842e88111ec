use async_trait::async_trait;
use medgen_domain::{ClinicalTask, MedgenResult, TaskRepository, TaskStatus};
use sqlx::{PgPool, Row};
use tracing::{debug, instrument};

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &sqlx::postgres::PgRow) -> MedgenResult<ClinicalTask> {
        Ok(ClinicalTask {
            id: row.try_get("task_id")?,
            description: row.try_get("description")?,
            task_type: row.try_get("task_type")?,
            patient_id: row.try_get("patient_id")?,
            doctor_id: row.try_get("doctor_id")?,
            urgency_score: row.try_get("urgency_score")?,
            priority_score: row.try_get("priority_score")?,
            proactive_score: row.try_get("proactive_score")?,
            scheduled_time: row.try_get("scheduled_time")?,
            status: row.try_get("status")?,
            is_emergency: row.try_get("is_emergency")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[instrument(skip(self, task), fields(
        task_type = %task.task_type,
        patient_id = %task.patient_id,
    ))]
    async fn create(&self, task: &ClinicalTask) -> MedgenResult<ClinicalTask> {
        let row = sqlx::query(
            r#"
            INSERT INTO tasks (description, task_type, patient_id, doctor_id,
                               urgency_score, priority_score, proactive_score,
                               scheduled_time, status, is_emergency)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING task_id, description, task_type, patient_id, doctor_id,
                      urgency_score, priority_score, proactive_score,
                      scheduled_time, status, is_emergency, created_at
            "#,
        )
        .bind(&task.description)
        .bind(&task.task_type)
        .bind(task.patient_id)
        .bind(task.doctor_id)
        .bind(task.urgency_score)
        .bind(task.priority_score)
        .bind(task.proactive_score)
        .bind(task.scheduled_time)
        .bind(task.status)
        .bind(task.is_emergency)
        .fetch_one(&self.pool)
        .await?;

        let created = Self::row_to_task(&row)?;
        debug!("插入任务成功: {}", created.entity_description());
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self, status: TaskStatus) -> MedgenResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
