use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::CreateStudentRequest,
};
use crate::utils::duplicate_key_response;
use crate::utils::validate::validate_email;

pub async fn create_student(
    service: &StudentService,
    mut create_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref email) = create_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    create_data.phone = create_data
        .phone
        .as_deref()
        .and_then(crate::utils::validate::normalize_phone);
    create_data.guardian_phone = create_data
        .guardian_phone
        .as_deref()
        .and_then(crate::utils::validate::normalize_phone);

    let storage = service.get_storage(request);

    // 批次必须存在
    match storage.get_batch_by_id(create_data.batch_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                format!("Batch {} not found", create_data.batch_id),
            )));
        }
        Err(e) => {
            error!("Batch lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Student creation failed",
            )));
        }
    }

    // 注册号全局唯一
    if let Ok(Some(_)) = storage
        .get_student_by_enrollment(&create_data.enrollment_number)
        .await
    {
        return Ok(duplicate_key_response(
            ErrorCode::StudentAlreadyExists,
            format!(
                "Enrollment number {} already exists",
                create_data.enrollment_number
            ),
        ));
    }

    // 学号在批次内唯一
    if let Ok(Some(_)) = storage
        .get_student_by_roll_in_batch(&create_data.roll_number, create_data.batch_id)
        .await
    {
        return Ok(duplicate_key_response(
            ErrorCode::StudentAlreadyExists,
            format!(
                "Roll number {} already exists in this batch",
                create_data.roll_number
            ),
        ));
    }

    match storage.create_student(create_data).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(student, "学生创建成功"))),
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::StudentAlreadyExists,
                    "Student already exists",
                ))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::StudentCreationFailed, msg)))
            }
        }
    }
}
