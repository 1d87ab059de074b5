use super::entities::Batch;
use crate::models::common::PaginationInfo;
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;
use serde::Serialize;

// 批次响应
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub batch: Batch,
}

// 批次详情（含成员学生、科目与任课教师）
#[derive(Debug, Serialize)]
pub struct BatchDetailResponse {
    pub batch: Batch,
    pub students: Vec<Student>,
    pub subjects: Vec<Subject>,
    pub teachers: Vec<Teacher>,
}

// 批次列表响应
#[derive(Debug, Serialize)]
pub struct BatchListResponse {
    pub items: Vec<Batch>,
    pub pagination: PaginationInfo,
}
