use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::responses::StudentResponse};

pub async fn get_student(
    service: &StudentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_with_batch(id).await {
        Ok(Some(student)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(StudentResponse { student }, "获取学生成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            format!("Student {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get student {}: {}", id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get student",
            )))
        }
    }
}
