use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::UpdateProfileRequest, responses::TeacherResponse},
};
use crate::utils::duplicate_key_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

pub async fn update_profile(
    service: &TeacherService,
    mut update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::TeacherEmailInvalid, msg)));
    }

    if let Some(password) = update_data.password.take() {
        if let Err(msg) = validate_password_simple(&password) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TeacherPasswordInvalid,
                msg,
            )));
        }
        // 哈希密码（使用 spawn_blocking 避免阻塞）
        update_data.password =
            match tokio::task::spawn_blocking(move || hash_password(&password)).await {
                Ok(Ok(hash)) => Some(hash),
                Ok(Err(e)) => {
                    error!("Password hashing failed: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Password hashing failed",
                        ),
                    ));
                }
                Err(e) => {
                    error!("Password hashing task failed: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Password hashing failed",
                        ),
                    ));
                }
            };
    }

    let storage = service.get_storage(request);

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(TeacherResponse { teacher }, "教师资料更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            let msg = format!("Teacher update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::TeacherEmailAlreadyExists,
                    "Email already in use",
                ))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::TeacherUpdateFailed, msg)))
            }
        }
    }
}
