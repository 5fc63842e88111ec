//! 紧急度评分
//!
//! 模拟下游评分模型的无状态打分函数：命中紧急关键词的文本
//! 获得高分区间，其余落在普通区间。

use rand::Rng;

const URGENT_KEYWORDS: [&str; 2] = ["urgent", "now"];

/// 根据任务文本计算 [0, 100] 范围内的紧急度评分
///
/// 文本（不区分大小写）包含 "urgent" 或 "now" 时从 [80, 100] 均匀抽取，
/// 否则从 [30, 79] 均匀抽取。
pub fn calculate_urgency_score(text: &str) -> i32 {
    let lowered = text.to_lowercase();
    let mut rng = rand::rng();

    if URGENT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        rng.random_range(80..=100)
    } else {
        rng.random_range(30..=79)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_text_scores_high() {
        for _ in 0..100 {
            let score = calculate_urgency_score("This is urgent, act now");
            assert!((80..=100).contains(&score));
        }
    }

    #[test]
    fn test_routine_text_scores_normal() {
        for _ in 0..100 {
            let score = calculate_urgency_score("routine checkup");
            assert!((30..=79).contains(&score));
        }
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        for _ in 0..100 {
            assert!(calculate_urgency_score("URGENT lab result") >= 80);
            assert!(calculate_urgency_score("Needs attention NOW") >= 80);
        }
    }
}
