//! 模拟工作负载生成
//!
//! 三个生产者写入同一个逻辑任务存储：
//! - [`DataSeeder`]：一次性播种医生与患者基础数据
//! - [`HistoryGenerator`]：批量生成过去 90 天的已完成任务
//! - [`TaskStreamer`]：按固定间隔持续插入待处理任务，直到收到关闭信号

pub mod history;
pub mod seeder;
pub mod streamer;

#[cfg(test)]
pub(crate) mod test_support;

pub use history::{HistoryGenerator, HistorySummary};
pub use seeder::{DataSeeder, SeedSummary};
pub use streamer::TaskStreamer;
