use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_by_subject(
    service: &AssignmentService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("Subject {subject_id} not found"),
            )));
        }
        Err(e) => {
            error!("Subject lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list assignments",
            )));
        }
    }

    match storage.list_assignments_by_subject(subject_id).await {
        Ok(assignments) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignments, "获取作业列表成功")))
        }
        Err(e) => {
            error!("Failed to list assignments of subject {}: {}", subject_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list assignments",
            )))
        }
    }
}
