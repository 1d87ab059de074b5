use super::entities::DiaryEntry;
use serde::Serialize;

// 教学日志列表响应
#[derive(Debug, Serialize)]
pub struct DiaryListResponse {
    pub count: usize,
    pub items: Vec<DiaryEntry>,
}
