use serde::Deserialize;

// 科目创建请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub code: String,
    pub name: String,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
    pub description: Option<String>,
    pub batch_id: i64,
    pub teacher_id: Option<i64>,
}

// 科目更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
}
