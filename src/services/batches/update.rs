use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BatchService;
use crate::utils::duplicate_key_response;
use crate::models::{
    ApiResponse, ErrorCode,
    batches::{requests::UpdateBatchRequest, responses::BatchResponse},
};

pub async fn update_batch(
    service: &BatchService,
    id: i64,
    update_data: UpdateBatchRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 批次编号变更时检查唯一
    if let Some(ref code) = update_data.batch_code
        && let Ok(Some(other)) = storage.get_batch_by_code(code).await
        && other.id != id
    {
        return Ok(duplicate_key_response(
            ErrorCode::BatchAlreadyExists,
            format!("Batch code {code} already exists"),
        ));
    }

    match storage.update_batch(id, update_data).await {
        Ok(Some(batch)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(BatchResponse { batch }, "批次更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BatchNotFound,
            format!("Batch {id} not found"),
        ))),
        Err(e) => {
            let msg = format!("Batch update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::BatchAlreadyExists,
                    "Batch code already exists",
                ))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::BatchUpdateFailed, msg)))
            }
        }
    }
}
