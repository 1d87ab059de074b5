use serde::{Deserialize, Serialize};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub roll_number: String,
    pub enrollment_number: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub batch_id: i64,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 携带批次信息的学生（详情 / 列表展示用）
#[derive(Debug, Clone, Serialize)]
pub struct StudentWithBatch {
    #[serde(flatten)]
    pub student: Student,
    pub batch_code: Option<String>,
    pub batch_name: Option<String>,
}
