use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subjects_by_batch(
    service: &SubjectService,
    batch_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 批次不存在时与空列表区分开
    match storage.get_batch_by_id(batch_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                format!("Batch {batch_id} not found"),
            )));
        }
        Err(e) => {
            error!("Batch lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list subjects",
            )));
        }
    }

    match storage.list_subjects_by_batch(batch_id).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(subjects, "获取科目列表成功"))),
        Err(e) => {
            error!("Failed to list subjects of batch {}: {}", batch_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list subjects",
            )))
        }
    }
}
