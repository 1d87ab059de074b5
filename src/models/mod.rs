pub mod common;

pub mod assignments;
pub mod attendance;
pub mod batches;
pub mod diary;
pub mod leaves;
pub mod lectures;
pub mod performance;
pub mod students;
pub mod subjects;
pub mod syllabus;
pub mod teacher_attendance;
pub mod teachers;

pub use common::{
    ApiResponse, ErrorCode, ExportParams, PaginatedResponse, PaginationInfo, PaginationQuery,
};

/// 应用启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
