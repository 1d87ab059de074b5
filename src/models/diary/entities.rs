use serde::{Deserialize, Serialize};

// 教学日志条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i64,
    pub teacher_id: i64,
    pub batch_id: i64,
    pub subject_id: i64,
    pub lecture_date: chrono::NaiveDate,
    pub notes: Option<String>,
    pub proofs: Option<String>,
    pub topics_covered: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
