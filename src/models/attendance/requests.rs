use serde::Deserialize;

// 考勤登记请求：将批次学生划分为出勤/缺勤两组
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub lecture_session_id: i64,
    #[serde(default)]
    pub present_student_ids: Vec<i64>,
    #[serde(default)]
    pub absent_student_ids: Vec<i64>,
}

// 批次考勤查询参数（可按科目过滤）
#[derive(Debug, Deserialize)]
pub struct BatchAttendanceParams {
    pub subject_id: Option<i64>,
}

// 批次考勤导出参数
#[derive(Debug, Deserialize)]
pub struct BatchAttendanceExportParams {
    #[serde(default = "default_format")]
    pub format: String,
    pub subject_id: Option<i64>,
}

fn default_format() -> String {
    "xlsx".to_string()
}
