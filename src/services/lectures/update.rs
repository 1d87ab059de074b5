use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LectureService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, lectures::requests::UpdateLectureRequest};

pub async fn update_lecture(
    service: &LectureService,
    update_data: UpdateLectureRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 只有归属教师能改自己的课次
    match storage.get_lecture_by_id(update_data.lecture_session_id).await {
        Ok(Some(lecture)) => {
            if lecture.teacher_id != teacher_id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::LecturePermissionDenied,
                    "Lecture belongs to another teacher",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LectureNotFound,
                format!("Lecture {} not found", update_data.lecture_session_id),
            )));
        }
        Err(e) => {
            error!("Lecture lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Lecture update failed",
            )));
        }
    }

    match storage.update_lecture(update_data).await {
        Ok(Some(lecture)) => Ok(HttpResponse::Ok().json(ApiResponse::success(lecture, "课次更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "Lecture not found",
        ))),
        Err(e) => {
            error!("Lecture update failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Lecture update failed",
            )))
        }
    }
}
