use serde::Deserialize;

// 作业创建请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub subject_id: i64,
    pub batch_id: i64,
    pub due_date: chrono::NaiveDate,
    pub max_marks: f64,
    pub attachments: Option<String>,
}

// 学生提交请求（重复提交覆盖旧提交）
#[derive(Debug, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub student_id: i64,
    pub file_url: Option<String>,
}

// 评分请求
#[derive(Debug, Deserialize)]
pub struct GradeSubmissionRequest {
    pub marks: f64,
    pub remarks: Option<String>,
}
