use serde::Serialize;

// 大纲进度
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SyllabusProgressResponse {
    pub syllabus_id: i64,
    pub total_topics: i64,
    pub completed_topics: i64,
    pub percentage: f64,
}
