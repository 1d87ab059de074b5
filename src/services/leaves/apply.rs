use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, leaves::requests::ApplyLeaveRequest};

pub async fn apply_leave(
    service: &LeaveService,
    apply_data: ApplyLeaveRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if apply_data.end_date < apply_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "end_date must not precede start_date",
        )));
    }

    if apply_data.reason.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "reason is required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.apply_leave(teacher_id, apply_data).await {
        Ok(leave) => Ok(HttpResponse::Created().json(ApiResponse::success(leave, "请假申请已提交"))),
        Err(e) => {
            error!("Failed to apply leave for teacher {}: {}", teacher_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to apply leave",
            )))
        }
    }
}
