use super::entities::{Student, StudentWithBatch};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 学生响应
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: StudentWithBatch,
}

// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}

// 导入失败/重复行信息
#[derive(Debug, Clone, Serialize)]
pub struct ImportRowIssue {
    pub index: usize,
    pub enrollment_number: String,
    pub reason: String,
}

// 批量导入结果（部分成功语义）
#[derive(Debug, Serialize)]
pub struct ImportStudentsResponse {
    pub total: usize,
    pub inserted: usize,
    pub duplicates: Vec<ImportRowIssue>,
    pub failed: Vec<ImportRowIssue>,
}
