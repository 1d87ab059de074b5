use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BatchService;
use crate::utils::duplicate_key_response;
use crate::models::{
    ApiResponse, ErrorCode,
    batches::{requests::CreateBatchRequest, responses::BatchResponse},
};

pub async fn create_batch(
    service: &BatchService,
    create_data: CreateBatchRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_data.batch_code.trim().is_empty() || create_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "batch_code and name are required",
        )));
    }

    let storage = service.get_storage(request);

    if let Ok(Some(_)) = storage.get_batch_by_code(&create_data.batch_code).await {
        return Ok(duplicate_key_response(
            ErrorCode::BatchAlreadyExists,
            format!("Batch code {} already exists", create_data.batch_code),
        ));
    }

    match storage.create_batch(create_data).await {
        Ok(batch) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(BatchResponse { batch }, "批次创建成功"))),
        Err(e) => {
            let msg = format!("Batch creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(duplicate_key_response(
                    ErrorCode::BatchAlreadyExists,
                    "Batch code already exists",
                ))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::BatchCreationFailed, msg)))
            }
        }
    }
}
