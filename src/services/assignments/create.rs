use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, assignments::requests::CreateAssignmentRequest};

pub async fn create_assignment(
    service: &AssignmentService,
    create_data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if create_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "title is required",
        )));
    }

    if create_data.max_marks <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "max_marks must be positive",
        )));
    }

    let storage = service.get_storage(request);

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
                ErrorCode::AssignmentCreationFailed,
                "Assignment creation failed",
            )));
        }
    }

    match storage.create_assignment(teacher_id, create_data).await {
        Ok(assignment) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "作业创建成功")))
        }
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AssignmentCreationFailed,
                "Assignment creation failed",
            )))
        }
    }
}
