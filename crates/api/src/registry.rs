//! 内存任务注册表
//!
//! 文本评分服务的临时存储：从生成的任务标识符映射到任务记录，
//! 生命周期与进程相同，不落入关系型任务存储。
//! 作为显式对象注入，测试可以实例化相互隔离的注册表。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredTask {
    pub text: String,
    pub urgency_score: i32,
    pub status: String,
}

impl ScoredTask {
    pub fn new(text: String, urgency_score: i32) -> Self {
        Self {
            text,
            urgency_score,
            status: "pending".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: RwLock<HashMap<Uuid, ScoredTask>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一条新任务，返回全局唯一的任务标识符
    pub async fn insert(&self, text: String, urgency_score: i32) -> Uuid {
        let task_id = Uuid::new_v4();
        let mut tasks = self.tasks.write().await;
        tasks.insert(task_id, ScoredTask::new(text, urgency_score));
        task_id
    }

    /// 读锁下克隆出一致的快照，不会观察到写入一半的条目
    pub async fn snapshot(&self) -> HashMap<Uuid, ScoredTask> {
        self.tasks.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_generates_unique_ids() {
        let registry = TaskRegistry::new();

        let id1 = registry.insert("first".to_string(), 50).await;
        let id2 = registry.insert("second".to_string(), 60).await;

        assert_ne!(id1, id2);
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn test_snapshot_reflects_all_inserts() {
        let registry = TaskRegistry::new();
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(registry.insert(format!("task {i}"), 30 + i).await);
        }

        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len(), 10);
        for id in ids {
            let task = snapshot.get(&id).expect("missing task");
            assert_eq!(task.status, "pending");
        }
    }

    #[tokio::test]
    async fn test_registries_are_isolated() {
        let first = TaskRegistry::new();
        let second = TaskRegistry::new();

        first.insert("only in first".to_string(), 42).await;

        assert_eq!(first.len().await, 1);
        assert!(second.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_kept() {
        use std::sync::Arc;

        let registry = Arc::new(TaskRegistry::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry.insert(format!("concurrent {i}"), 50).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(registry.len().await, 32);
    }
}
