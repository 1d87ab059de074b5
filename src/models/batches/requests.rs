use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 批次创建请求
#[derive(Debug, Deserialize)]
pub struct CreateBatchRequest {
    pub batch_code: String,
    pub name: String,
    pub year: i32,
    pub department: String,
}

// 批次更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateBatchRequest {
    pub batch_code: Option<String>,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub department: Option<String>,
}

// 批次查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct BatchListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub department: Option<String>,
    pub year: Option<i32>,
}

// 批次列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct BatchListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub department: Option<String>,
    pub year: Option<i32>,
}
