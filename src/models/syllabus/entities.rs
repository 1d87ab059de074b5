use serde::{Deserialize, Serialize};

// 大纲知识点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllabusTopic {
    pub id: i64,
    pub position: i32,
    pub title: String,
    pub is_completed: bool,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_by: Option<i64>,
    pub proofs: Option<String>,
    pub notes: Option<String>,
}

// 大纲模块（知识点分组）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyllabusModule {
    pub id: i64,
    pub position: i32,
    pub title: String,
    pub topics: Vec<SyllabusTopic>,
}

// 教学大纲（模块 → 知识点树）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Syllabus {
    pub id: i64,
    pub subject_id: i64,
    pub batch_id: i64,
    pub modules: Vec<SyllabusModule>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
