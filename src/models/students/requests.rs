use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学生创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub roll_number: String,
    pub enrollment_number: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub batch_id: i64,
    pub department: Option<String>,
    pub year: Option<i32>,
}

// 学生更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub roll_number: Option<String>,
    pub enrollment_number: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub batch_id: Option<i64>,
    pub department: Option<String>,
    pub year: Option<i32>,
}

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub year: Option<i32>,
    pub department: Option<String>,
    pub batch_id: Option<i64>,
    pub search: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub year: Option<i32>,
    pub department: Option<String>,
    pub batch_id: Option<i64>,
    pub search: Option<String>,
}

// 批量导入请求（JSON 行集）
#[derive(Debug, Deserialize)]
pub struct ImportStudentsRequest {
    pub students: Vec<ImportStudentRow>,
}

// 导入行，批次以编号引用
#[derive(Debug, Clone, Deserialize)]
pub struct ImportStudentRow {
    pub roll_number: String,
    pub enrollment_number: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub batch_code: String,
    pub department: Option<String>,
    pub year: Option<i32>,
}
