use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherAttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, teacher_attendance::requests::MarkTeacherAttendanceRequest,
};
use crate::utils::duplicate_key_response;

pub async fn mark_attendance(
    service: &TeacherAttendanceService,
    mark_data: MarkTeacherAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(marked_by) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 被登记的教师必须存在
    match storage.get_teacher_by_id(mark_data.teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                format!("Teacher {} not found", mark_data.teacher_id),
            )));
        }
        Err(e) => {
            error!("Teacher lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to mark teacher attendance",
            )));
        }
    }

    match storage.mark_teacher_attendance(marked_by, mark_data).await {
        Ok(record) => Ok(HttpResponse::Created().json(ApiResponse::success(record, "教师考勤登记成功"))),
        Err(e) => {
            let msg = format!("{e}");
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::TeacherAttendanceAlreadyMarked,
                    "Attendance already marked for this teacher and date",
                ))
            } else {
                error!("Failed to mark teacher attendance: {}", msg);
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to mark teacher attendance",
                )))
            }
        }
    }
}
