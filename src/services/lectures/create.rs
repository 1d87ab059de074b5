use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LectureService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, lectures::requests::CreateLectureRequest};
use crate::utils::duplicate_key_response;

pub async fn create_lecture(
    service: &LectureService,
    create_data: CreateLectureRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 课次编号唯一
    if let Ok(Some(_)) = storage.get_lecture_by_code(&create_data.session_code).await {
        return Ok(duplicate_key_response(
            ErrorCode::LectureCodeAlreadyExists,
            format!("Session code {} already exists", create_data.session_code),
        ));
    }

    // 科目必须存在且属于目标批次
    match storage.get_subject_by_id(create_data.subject_id).await {
        Ok(Some(subject)) => {
            if subject.batch_id != create_data.batch_id {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Subject does not belong to the given batch",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("Subject {} not found", create_data.subject_id),
            )));
        }
        Err(e) => {
            error!("Subject lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Lecture creation failed",
            )));
        }
    }

    match storage.create_lecture(teacher_id, create_data).await {
        Ok(lecture) => Ok(HttpResponse::Created().json(ApiResponse::success(lecture, "课次创建成功"))),
        Err(e) => {
            let msg = format!("Lecture creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::LectureCodeAlreadyExists,
                    "Session code already exists",
                ))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
