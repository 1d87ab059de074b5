use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, leaves::requests::LeaveListParams};

pub async fn list_leaves(
    service: &LeaveService,
    params: LeaveListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_leaves(params.status).await {
        Ok(leaves) => Ok(HttpResponse::Ok().json(ApiResponse::success(leaves, "获取请假列表成功"))),
        Err(e) => {
            error!("Failed to list leaves: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list leaves",
            )))
        }
    }
}

pub async fn my_leaves(service: &LeaveService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_leaves_by_teacher(teacher_id).await {
        Ok(leaves) => Ok(HttpResponse::Ok().json(ApiResponse::success(leaves, "获取请假列表成功"))),
        Err(e) => {
            error!("Failed to list leaves of teacher {}: {}", teacher_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list leaves",
            )))
        }
    }
}
