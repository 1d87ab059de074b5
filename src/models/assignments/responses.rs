use super::entities::{Assignment, AssignmentSubmission};
use serde::Serialize;

// 携带教师/批次信息的作业
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithInfo {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub teacher_name: Option<String>,
    pub batch_name: Option<String>,
}

// 携带学生信息的提交行（报表用）
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionWithStudent {
    #[serde(flatten)]
    pub submission: AssignmentSubmission,
    pub roll_number: String,
    pub student_name: String,
}

// 批次报表中的学生平均分行
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentAverageRow {
    pub student_id: i64,
    pub roll_number: String,
    pub student_name: String,
    pub graded_count: i64,
    pub average_marks: f64,
}
