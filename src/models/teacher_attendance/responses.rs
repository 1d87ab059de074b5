use super::entities::TeacherAttendanceRecord;
use serde::Serialize;

// 某日全部教师考勤（附教师信息）
#[derive(Debug, Clone, Serialize)]
pub struct TeacherAttendanceWithTeacher {
    #[serde(flatten)]
    pub record: TeacherAttendanceRecord,
    pub teacher_name: String,
    pub teacher_code: String,
}

// 教师考勤汇总：按状态计数与出勤率
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeacherAttendanceSummary {
    pub teacher_id: i64,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub on_leave: i64,
    pub percentage: f64,
}
