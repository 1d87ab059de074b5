use super::entities::AttendanceRecord;
use crate::models::lectures::entities::LectureSession;
use crate::models::students::entities::Student;
use serde::Serialize;

// 单课次考勤详情
#[derive(Debug, Serialize)]
pub struct SessionAttendanceResponse {
    pub session: LectureSession,
    pub record: AttendanceRecord,
    pub present: Vec<Student>,
    pub absent: Vec<Student>,
}

// 学生单课次出勤明细行
#[derive(Debug, Clone, Serialize)]
pub struct StudentSessionRow {
    pub lecture_session_id: i64,
    pub session_code: String,
    pub subject_name: String,
    pub date: chrono::NaiveDate,
    pub present: bool,
}

// 学生考勤汇总（按需从原始考勤行重算）
#[derive(Debug, Serialize)]
pub struct StudentAttendanceSummary {
    pub student_id: i64,
    pub total: i64,
    pub attended: i64,
    pub percentage: f64,
    pub sessions: Vec<StudentSessionRow>,
}

// 批次内单个学生的考勤汇总行
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchAttendanceRow {
    pub student_id: i64,
    pub roll_number: String,
    pub name: String,
    pub total: i64,
    pub attended: i64,
    pub percentage: f64,
}

// 出勤率分布桶
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceDistribution {
    pub above90: i64,
    pub between75_89: i64,
    pub between50_74: i64,
    pub below50: i64,
}

// 批次考勤分析
#[derive(Debug, Serialize)]
pub struct BatchAttendanceAnalytics {
    pub batch_id: i64,
    pub total_students: i64,
    pub average_percentage: f64,
    pub top_performers: Vec<BatchAttendanceRow>,
    pub bottom_performers: Vec<BatchAttendanceRow>,
    pub distribution: AttendanceDistribution,
}

// 批次考勤汇总
#[derive(Debug, Serialize)]
pub struct BatchAttendanceSummary {
    pub batch_id: i64,
    pub subject_id: Option<i64>,
    pub rows: Vec<BatchAttendanceRow>,
}
