use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn student_summary(
    service: &AttendanceService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生必须存在，与"存在但零出勤"区分开
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student {student_id} not found"),
            )));
        }
        Err(e) => {
            error!("Student lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get attendance summary",
            )));
        }
    }

    match storage.student_attendance_summary(student_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "获取考勤汇总成功"))),
        Err(e) => {
            error!(
                "Failed to summarize attendance for student {}: {}",
                student_id, e
            );
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get attendance summary",
            )))
        }
    }
}
