use super::entities::TeacherAttendanceStatus;
use serde::Deserialize;

// 教师考勤登记请求
#[derive(Debug, Deserialize)]
pub struct MarkTeacherAttendanceRequest {
    pub teacher_id: i64,
    pub date: chrono::NaiveDate,
    pub status: TeacherAttendanceStatus,
    pub remarks: Option<String>,
}
