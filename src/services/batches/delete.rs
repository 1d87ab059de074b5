use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BatchService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_batch(
    service: &BatchService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_batch(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("批次删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BatchNotFound,
            format!("Batch {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to delete batch {}: {}", id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::BatchDeleteFailed,
                "Failed to delete batch",
            )))
        }
    }
}
