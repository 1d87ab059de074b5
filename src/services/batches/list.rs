use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BatchService;
use crate::models::{
    ApiResponse, ErrorCode,
    batches::requests::{BatchListParams, BatchListQuery},
};

pub async fn list_batches(
    service: &BatchService,
    params: BatchListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = BatchListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        department: params.department,
        year: params.year,
    };

    match storage.list_batches_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取批次列表成功"))),
        Err(e) => {
            error!("Failed to list batches: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list batches",
            )))
        }
    }
}
