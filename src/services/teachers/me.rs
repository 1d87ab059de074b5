use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, teachers::responses::TeacherResponse};

pub async fn me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_teacher(request) {
        Some(teacher) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(TeacherResponse { teacher }, "获取教师资料成功"))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}
