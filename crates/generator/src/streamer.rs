//! 实时任务流生成
//!
//! 按固定间隔插入一条待处理任务，模拟线上持续到达的工作负载。
//! 循环通过关闭信号取消，单次插入失败不影响后续迭代。

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::broadcast;
use tracing::{error, info};

use medgen_config::StreamerConfig;
use medgen_domain::{
    ClinicalTask, EntityKind, IdentifierResolver, MedgenError, MedgenResult, TaskRepository,
};

const STREAM_DESCRIPTIONS: [&str; 4] = [
    "New Appointment Request",
    "Urgent Lab Result",
    "System Alert for Vitals",
    "Patient Follow-up Call",
];
const STREAM_TASK_TYPES: [&str; 3] = ["Alert", "Request", "Review"];

pub struct TaskStreamer {
    task_repo: Arc<dyn TaskRepository>,
    resolver: Arc<dyn IdentifierResolver>,
    config: StreamerConfig,
}

impl TaskStreamer {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        resolver: Arc<dyn IdentifierResolver>,
        config: StreamerConfig,
    ) -> Self {
        Self {
            task_repo,
            resolver,
            config,
        }
    }

    /// 运行任务流，直到收到关闭信号
    ///
    /// 启动时解析一次患者标识符；患者集合为空对本生成器是致命的，
    /// 直接返回错误而不进入循环。
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> MedgenResult<()> {
        let patient_ids = self.resolver.resolve(EntityKind::Patient).await?;

        if patient_ids.is_empty() {
            error!("患者数据为空，任务流无法启动，请先执行播种");
            return Err(MedgenError::empty_population(EntityKind::Patient));
        }

        info!(
            "任务流已启动: 每 {} 秒插入一条待处理任务",
            self.config.interval_seconds
        );

        let mut interval =
            tokio::time::interval(Duration::from_secs(self.config.interval_seconds));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = self.emit_one(&patient_ids).await {
                        error!("流式任务插入失败: {}", e);
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("任务流收到关闭信号");
                    break;
                }
            }
        }

        Ok(())
    }

    async fn emit_one(&self, patient_ids: &[i64]) -> MedgenResult<()> {
        let task = Self::build_task(&self.config, patient_ids, &mut rand::rng());
        let created = self.task_repo.create(&task).await?;
        info!(
            "新任务已插入 (患者 ID: {}, 类型: {})",
            created.patient_id, created.task_type
        );
        Ok(())
    }

    /// 构造一条待处理任务：评分默认 0.0，医生留空，等待外部模型处理
    fn build_task(
        config: &StreamerConfig,
        patient_ids: &[i64],
        rng: &mut impl Rng,
    ) -> ClinicalTask {
        ClinicalTask::pending(
            STREAM_DESCRIPTIONS[rng.random_range(0..STREAM_DESCRIPTIONS.len())].to_string(),
            STREAM_TASK_TYPES[rng.random_range(0..STREAM_TASK_TYPES.len())].to_string(),
            patient_ids[rng.random_range(0..patient_ids.len())],
            Utc::now(),
            rng.random_bool(config.emergency_rate),
        )
    }
}
