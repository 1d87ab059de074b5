use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    leaves::{entities::LeaveStatus, requests::UpdateLeaveStatusRequest},
};

/// 审批请假。批准路径在存储层的单个事务内更新状态并为
/// 请假区间的每一天补写 On-Leave 教师考勤。
pub async fn update_leave_status(
    service: &LeaveService,
    id: i64,
    status_data: UpdateLeaveStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(approver_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 只能审批待处理的请假单
    match storage.get_leave_by_id(id).await {
        Ok(Some(leave)) => {
            if leave.status != LeaveStatus::Pending {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidLeaveStatus,
                    format!("Leave {id} is already {}", leave.status),
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LeaveNotFound,
                format!("Leave {id} not found"),
            )));
        }
        Err(e) => {
            error!("Leave lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::LeaveApprovalFailed,
                "Failed to update leave status",
            )));
        }
    }

    let result = match status_data.status {
        LeaveStatus::Approved => storage.apply_leave_approval(id, approver_id).await,
        LeaveStatus::Rejected => storage.reject_leave(id, approver_id).await,
        LeaveStatus::Pending => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidLeaveStatus,
                "Leave cannot be set back to pending",
            )));
        }
    };

    match result {
        Ok(Some(leave)) => Ok(HttpResponse::Ok().json(ApiResponse::success(leave, "请假审批完成"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LeaveNotFound,
            format!("Leave {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to update leave {} status: {}", id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::LeaveApprovalFailed,
                "Failed to update leave status",
            )))
        }
    }
}
