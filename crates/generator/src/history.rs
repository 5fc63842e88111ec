//! 历史任务批量生成
//!
//! 在生成时刻之前的时间窗口内合成一批已完成任务，分两个阶段：
//! 常规阶段模拟固定的每周行政复查，随机阶段在窗口内均匀散布
//! 各类临床任务。批次内每条任务是独立的工作单元。

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::{Rng, SeedableRng};
use tracing::{error, info, warn};

use medgen_config::HistoryConfig;
use medgen_domain::{
    ClinicalTask, EntityKind, IdentifierResolver, MedgenError, MedgenResult, TaskRepository,
    TaskStatus,
};

pub const ROUTINE_DESCRIPTION: &str = "Weekly Admin Review";
pub const ROUTINE_TASK_TYPE: &str = "Admin";

const RANDOM_DESCRIPTIONS: [&str; 5] = [
    "Checkup",
    "Prescription Refill",
    "Initial Assessment",
    "Follow-up",
    "Virtual Consult",
];
const RANDOM_TASK_TYPES: [&str; 3] = ["Consult", "Treatment", "Review"];

/// 评分的均匀取值区间 (0.1, 9.9)
const SCORE_LOW: f64 = 0.1;
const SCORE_HIGH: f64 = 9.9;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub inserted: usize,
    pub failed: usize,
}

pub struct HistoryGenerator {
    task_repo: Arc<dyn TaskRepository>,
    resolver: Arc<dyn IdentifierResolver>,
    config: HistoryConfig,
}

impl HistoryGenerator {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        resolver: Arc<dyn IdentifierResolver>,
        config: HistoryConfig,
    ) -> Self {
        Self {
            task_repo,
            resolver,
            config,
        }
    }

    /// 生成整个历史批次
    ///
    /// 标识符解析失败或任一实体集合为空时，整批在产生任何任务之前中止；
    /// 批次中单条插入失败只记录日志并继续下一条。
    pub async fn generate(&self) -> MedgenResult<HistorySummary> {
        info!("开始生成 {} 条历史任务", self.config.batch_size);

        let doctor_ids = self.resolver.resolve(EntityKind::Doctor).await?;
        let patient_ids = self.resolver.resolve(EntityKind::Patient).await?;

        if doctor_ids.is_empty() {
            warn!("医生数据为空，中止历史任务生成");
            return Err(MedgenError::empty_population(EntityKind::Doctor));
        }
        if patient_ids.is_empty() {
            warn!("患者数据为空，中止历史任务生成");
            return Err(MedgenError::empty_population(EntityKind::Patient));
        }

        let start = Utc::now() - Duration::days(self.config.span_days);
        let mut rng = rand::rngs::StdRng::from_os_rng();
        let mut summary = HistorySummary::default();

        for index in 0..self.config.batch_size {
            let task = Self::build_task(&self.config, index, start, &doctor_ids, &patient_ids, &mut rng);
            match self.task_repo.create(&task).await {
                Ok(_) => summary.inserted += 1,
                Err(e) => {
                    summary.failed += 1;
                    error!("插入第 {} 条历史任务失败: {}", index + 1, e);
                }
            }
        }

        match self.task_repo.count_by_status(TaskStatus::Complete).await {
            Ok(total) => info!(
                "历史批次完成: 新增 {} 条, 失败 {} 条, 库中已完成任务共 {} 条",
                summary.inserted, summary.failed, total,
            ),
            Err(e) => warn!("统计已完成任务数量失败: {}", e),
        }

        Ok(summary)
    }

    /// 构造批次中第 `index` 条任务
    ///
    /// 前 `routine_count` 条为常规周期任务：固定描述与类型，固定分配给
    /// 首位医生与首位患者，当日 09:00 起加 0–30 分钟抖动；周序号在时间
    /// 窗口内循环，保证所有时间都落在 [start, now] 之内。
    /// 其余为随机任务：窗口内随机完整日、工作时段 8–17 点，
    /// 描述/类型/医生/患者均独立均匀抽取。
    ///
    /// 排期统一取自然日的钟点时刻，窗口首尾的不完整日不参与抽取，
    /// 因此任何生成时刻下时间都不会越过窗口边界。
    fn build_task(
        config: &HistoryConfig,
        index: usize,
        start: DateTime<Utc>,
        doctor_ids: &[i64],
        patient_ids: &[i64],
        rng: &mut impl Rng,
    ) -> ClinicalTask {
        let (description, task_type, doctor_id, patient_id, scheduled_time) =
            if index < config.routine_count {
                let weeks_in_span = (config.span_days / 7).max(1);
                let week = (index as i64) % weeks_in_span;
                let day = (start + Duration::days(1) + Duration::weeks(week)).date_naive();
                let scheduled = day.and_time(NaiveTime::MIN).and_utc()
                    + Duration::hours(9)
                    + Duration::minutes(rng.random_range(0..=30));
                (
                    ROUTINE_DESCRIPTION.to_string(),
                    ROUTINE_TASK_TYPE.to_string(),
                    doctor_ids[0],
                    patient_ids[0],
                    scheduled,
                )
            } else {
                let day = (start + Duration::days(rng.random_range(1..config.span_days)))
                    .date_naive();
                let scheduled = day.and_time(NaiveTime::MIN).and_utc()
                    + Duration::hours(rng.random_range(8..=17))
                    + Duration::minutes(rng.random_range(0..=59));
                (
                    RANDOM_DESCRIPTIONS[rng.random_range(0..RANDOM_DESCRIPTIONS.len())].to_string(),
                    RANDOM_TASK_TYPES[rng.random_range(0..RANDOM_TASK_TYPES.len())].to_string(),
                    doctor_ids[rng.random_range(0..doctor_ids.len())],
                    patient_ids[rng.random_range(0..patient_ids.len())],
                    scheduled,
                )
            };

        ClinicalTask::historical(
            description,
            task_type,
            patient_id,
            doctor_id,
            rng.random_range(SCORE_LOW..SCORE_HIGH),
            rng.random_range(SCORE_LOW..SCORE_HIGH),
            rng.random_range(SCORE_LOW..SCORE_HIGH),
            scheduled_time,
            rng.random_bool(config.emergency_rate),
        )
    }
}
