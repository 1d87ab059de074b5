use super::entities::LeaveStatus;
use serde::Deserialize;

// 请假申请请求
#[derive(Debug, Deserialize)]
pub struct ApplyLeaveRequest {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: String,
}

// 请假审批请求
#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveStatus,
}

// 请假列表查询参数
#[derive(Debug, Deserialize)]
pub struct LeaveListParams {
    pub status: Option<LeaveStatus>,
}
