use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::utils::duplicate_key_response;
use crate::utils::validate::{normalize_phone, validate_email};

pub async fn update_student(
    service: &StudentService,
    id: i64,
    mut update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    update_data.phone = update_data.phone.as_deref().and_then(normalize_phone);
    update_data.guardian_phone = update_data
        .guardian_phone
        .as_deref()
        .and_then(normalize_phone);

    let storage = service.get_storage(request);

    let existing = match storage.get_student_by_id(id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student {id} not found"),
            )));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Student update failed",
            )));
        }
    };

    // 目标批次必须存在
    if let Some(batch_id) = update_data.batch_id {
        match storage.get_batch_by_id(batch_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::BatchNotFound,
                    format!("Batch {batch_id} not found"),
                )));
            }
            Err(e) => {
                error!("Batch lookup failed: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Student update failed",
                )));
            }
        }
    }

    // 注册号变更时检查全局唯一
    if let Some(ref enrollment) = update_data.enrollment_number
        && enrollment != &existing.enrollment_number
        && let Ok(Some(_)) = storage.get_student_by_enrollment(enrollment).await
    {
        return Ok(duplicate_key_response(
            ErrorCode::StudentAlreadyExists,
            format!("Enrollment number {enrollment} already exists"),
        ));
    }

    // 学号或批次变更时检查批次内唯一
    let target_batch = update_data.batch_id.unwrap_or(existing.batch_id);
    let target_roll = update_data
        .roll_number
        .clone()
        .unwrap_or_else(|| existing.roll_number.clone());
    if (target_batch != existing.batch_id || target_roll != existing.roll_number)
        && let Ok(Some(other)) = storage
            .get_student_by_roll_in_batch(&target_roll, target_batch)
            .await
        && other.id != id
    {
        return Ok(duplicate_key_response(
            ErrorCode::StudentAlreadyExists,
            format!("Roll number {target_roll} already exists in this batch"),
        ));
    }

    match storage.update_student(id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "学生更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            format!("Student {id} not found"),
        ))),
        Err(e) => {
            let msg = format!("Student update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::StudentAlreadyExists,
                    "Student already exists",
                ))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::StudentUpdateFailed, msg)))
            }
        }
    }
}
