use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode, assignments::requests::GradeSubmissionRequest};

pub async fn grade_submission(
    service: &AssignmentService,
    assignment_id: i64,
    student_id: i64,
    grade_data: GradeSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
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
                "Failed to grade submission",
            )));
        }
    };

    if grade_data.marks < 0.0 || grade_data.marks > assignment.max_marks {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("marks must be within 0..={}", assignment.max_marks),
        )));
    }

    match storage
        .grade_submission(assignment_id, student_id, grade_data)
        .await
    {
        Ok(Some(submission)) => Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "评分成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            format!("No submission from student {student_id} for assignment {assignment_id}"),
        ))),
        Err(e) => {
            error!(
                "Failed to grade submission ({}, {}): {}",
                assignment_id, student_id, e
            );
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to grade submission",
            )))
        }
    }
}
