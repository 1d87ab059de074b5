use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode, assignments::requests::SubmitAssignmentRequest};

/// 学生提交作业。重复提交覆盖旧行：状态重置为 Submitted，
/// 旧的分数与评语清空。
pub async fn submit_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    submit_data: SubmitAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                format!("Assignment {assignment_id} not found"),
            )));
        }
        Err(e) => {
            error!("Assignment lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit assignment",
            )));
        }
    }

    // 学生必须存在
    match storage.get_student_by_id(submit_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student {} not found", submit_data.student_id),
            )));
        }
        Err(e) => {
            error!("Student lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit assignment",
            )));
        }
    }

    match storage.submit_assignment(assignment_id, submit_data).await {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "作业提交成功"))),
        Err(e) => {
            error!(
                "Failed to submit assignment {}: {}",
                assignment_id, e
            );
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit assignment",
            )))
        }
    }
}
