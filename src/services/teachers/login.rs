use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::TeacherService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::password::verify_password;

pub async fn login(
    service: &TeacherService,
    login_data: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher = match storage.get_teacher_by_email(&login_data.email).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            warn!("Login attempt with unknown email: {}", login_data.email);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Invalid email or password",
            )));
        }
        Err(e) => {
            error!("Login query failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed",
                )),
            );
        }
    };

    // 校验密码（使用 spawn_blocking 避免阻塞）
    let password = login_data.password.clone();
    let password_hash = teacher.password_hash.clone();
    let verified =
        match tokio::task::spawn_blocking(move || verify_password(&password, &password_hash)).await
        {
            Ok(verified) => verified,
            Err(e) => {
                error!("Password verification task failed: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Login failed",
                    )),
                );
            }
        };

    if !verified {
        warn!("Password mismatch for teacher {}", teacher.id);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Invalid email or password",
        )));
    }

    // 登录成功，刷新最近登录时间（失败不阻断登录）
    if let Err(e) = storage.update_last_login(teacher.id).await {
        warn!("Failed to update last login for teacher {}: {}", teacher.id, e);
    }

    let access_token = match teacher.generate_access_token() {
        Ok(token) => token,
        Err(e) => {
            error!("Token generation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed",
                )),
            );
        }
    };

    let config = AppConfig::get();
    let response = LoginResponse {
        access_token,
        expires_in: config.jwt.access_token_expiry * 3600,
        teacher,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "登录成功")))
}
