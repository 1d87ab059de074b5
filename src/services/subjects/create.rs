use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::CreateSubjectRequest};

pub async fn create_subject(
    service: &SubjectService,
    create_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_data.code.trim().is_empty() || create_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "code and name are required",
        )));
    }

    let storage = service.get_storage(request);

    // 批次必须存在
    match storage.get_batch_by_id(create_data.batch_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                format!("Batch {} not found", create_data.batch_id),
            )));
        }
        Err(e) => {
            error!("Batch lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Subject creation failed",
            )));
        }
    }

    // 任课教师必须存在
    if let Some(teacher_id) = create_data.teacher_id {
        match storage.get_teacher_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    format!("Teacher {teacher_id} not found"),
                )));
            }
            Err(e) => {
                error!("Teacher lookup failed: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Subject creation failed",
                )));
            }
        }
    }

    match storage.create_subject(create_data).await {
        Ok(subject) => Ok(HttpResponse::Created().json(ApiResponse::success(subject, "科目创建成功"))),
        Err(e) => {
            error!("Subject creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::SubjectCreationFailed,
                "Subject creation failed",
            )))
        }
    }
}
