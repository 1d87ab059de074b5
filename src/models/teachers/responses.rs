use super::entities::Teacher;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 教师响应
#[derive(Debug, Serialize)]
pub struct TeacherResponse {
    pub teacher: Teacher,
}

// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub teacher: Teacher,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub items: Vec<Teacher>,
    pub pagination: PaginationInfo,
}
