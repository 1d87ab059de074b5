use super::entities::LectureStatus;
use serde::Deserialize;

// 课次创建请求
#[derive(Debug, Deserialize)]
pub struct CreateLectureRequest {
    pub session_code: String,
    pub subject_id: i64,
    pub batch_id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub topic: Option<String>,
}

// 课次状态更新请求（改期可携带新的日期/时间）
#[derive(Debug, Deserialize)]
pub struct UpdateLectureRequest {
    pub lecture_session_id: i64,
    pub status: LectureStatus,
    pub date: Option<chrono::NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
