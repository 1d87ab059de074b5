use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &StudentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("学生删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            format!("Student {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to delete student {}: {}", id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentDeleteFailed,
                "Failed to delete student",
            )))
        }
    }
}
