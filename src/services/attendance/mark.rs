use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::AttendanceService;
use crate::errors::EduSysError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::MarkAttendanceRequest};
use crate::utils::duplicate_key_response;

pub async fn mark_attendance(
    service: &AttendanceService,
    mark_data: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if mark_data.present_student_ids.is_empty() && mark_data.absent_student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "At least one student must be listed as present or absent",
        )));
    }

    // 出勤/缺勤名单不能重叠
    for id in &mark_data.present_student_ids {
        if mark_data.absent_student_ids.contains(id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Student {id} listed as both present and absent"),
            )));
        }
    }

    let storage = service.get_storage(request);

    // 课次必须存在且归属当前教师
    match storage.get_lecture_by_id(mark_data.lecture_session_id).await {
        Ok(Some(lecture)) => {
            if lecture.teacher_id != teacher_id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::LecturePermissionDenied,
                    "Lecture belongs to another teacher",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LectureNotFound,
                format!("Lecture {} not found", mark_data.lecture_session_id),
            )));
        }
        Err(e) => {
            error!("Lecture lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AttendanceMarkFailed,
                "Failed to mark attendance",
            )));
        }
    }

    match storage.mark_attendance(teacher_id, mark_data).await {
        Ok(response) => Ok(HttpResponse::Created().json(ApiResponse::success(response, "考勤登记成功"))),
        Err(EduSysError::Conflict(msg)) => {
            warn!("Attendance conflict: {}", msg);
            Ok(duplicate_key_response(
                ErrorCode::AttendanceAlreadyMarked,
                "Attendance already marked for this lecture",
            ))
        }
        Err(EduSysError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, msg))),
        Err(e) => {
            error!("Failed to mark attendance: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AttendanceMarkFailed,
                "Failed to mark attendance",
            )))
        }
    }
}
