use super::entities::TeacherRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 教师注册请求
#[derive(Debug, Deserialize)]
pub struct RegisterTeacherRequest {
    pub teacher_code: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub department: String,
    #[serde(default)]
    pub role: Option<TeacherRole>,
}

// 教师登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// 教师资料更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct TeacherListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub search: Option<String>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub department: Option<String>,
    pub search: Option<String>,
}
