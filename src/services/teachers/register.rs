use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::RegisterTeacherRequest, responses::TeacherResponse},
};
use crate::utils::duplicate_key_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_teacher_code};

pub async fn register(
    service: &TeacherService,
    mut register_data: RegisterTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证工号
    if let Err(msg) = validate_teacher_code(&register_data.teacher_code) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&register_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::TeacherEmailInvalid, msg)));
    }

    // 验证密码策略
    if let Err(msg) = validate_password_simple(&register_data.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TeacherPasswordInvalid,
            msg,
        )));
    }

    // 哈希密码（使用 spawn_blocking 避免阻塞）
    let password_clone = register_data.password.clone();
    register_data.password =
        match tokio::task::spawn_blocking(move || hash_password(&password_clone)).await {
            Ok(Ok(hash)) => hash,
            Ok(Err(e)) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Password hashing failed: {e}"),
                    )),
                );
            }
            Err(e) => {
                error!("Password hashing task failed: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Password hashing failed",
                    )),
                );
            }
        };

    let storage = service.get_storage(request);

    match storage.create_teacher(register_data).await {
        Ok(teacher) => Ok(HttpResponse::Created().json(ApiResponse::success(
            TeacherResponse { teacher },
            "教师注册成功",
        ))),
        Err(e) => {
            let msg = format!("Teacher registration failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::TeacherEmailAlreadyExists,
                    "Teacher code or email already exists",
                ))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::RegisterFailed, msg)))
            }
        }
    }
}
