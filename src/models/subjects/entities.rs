use serde::{Deserialize, Serialize};

// 科目实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
    pub description: Option<String>,
    pub batch_id: i64,
    pub teacher_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 携带任课教师信息的科目
#[derive(Debug, Clone, Serialize)]
pub struct SubjectWithTeacher {
    #[serde(flatten)]
    pub subject: Subject,
    pub teacher_name: Option<String>,
    pub teacher_code: Option<String>,
}
