use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_session_attendance(
    service: &AttendanceService,
    lecture_session_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_session_attendance(lecture_session_id).await {
        Ok(Some(response)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取考勤详情成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            format!("No attendance recorded for lecture {lecture_session_id}"),
        ))),
        Err(e) => {
            error!(
                "Failed to get attendance for lecture {}: {}",
                lecture_session_id, e
            );
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get attendance",
            )))
        }
    }
}
