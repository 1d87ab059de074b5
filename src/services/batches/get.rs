use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BatchService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_batch(
    service: &BatchService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_batch_detail(id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "获取批次成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BatchNotFound,
            format!("Batch {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get batch {}: {}", id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get batch",
            )))
        }
    }
}
