use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherAttendanceService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_by_date(
    service: &TeacherAttendanceService,
    date: chrono::NaiveDate,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teacher_attendance_by_date(date).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records, "获取教师考勤成功"))),
        Err(e) => {
            error!("Failed to list teacher attendance for {}: {}", date, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list teacher attendance",
            )))
        }
    }
}
