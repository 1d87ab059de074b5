use serde::{Deserialize, Serialize};

// 考勤记录（每课次一条，创建后不可变）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub lecture_session_id: i64,
    pub subject_id: i64,
    pub batch_id: i64,
    pub teacher_id: i64,
    pub date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 考勤明细行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub present: bool,
}
