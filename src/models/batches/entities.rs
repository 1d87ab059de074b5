use serde::{Deserialize, Serialize};

// 批次（班级）实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub id: i64,
    pub batch_code: String,
    pub name: String,
    pub year: i32,
    pub department: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
