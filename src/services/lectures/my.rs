use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LectureService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn my_lectures(
    service: &LectureService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_lectures_by_teacher(teacher_id).await {
        Ok(lectures) => Ok(HttpResponse::Ok().json(ApiResponse::success(lectures, "获取课次列表成功"))),
        Err(e) => {
            error!("Failed to list lectures of teacher {}: {}", teacher_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list lectures",
            )))
        }
    }
}
