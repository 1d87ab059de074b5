use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_subject(
    service: &SubjectService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("科目删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            format!("Subject {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to delete subject {}: {}", id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::SubjectDeleteFailed,
                "Failed to delete subject",
            )))
        }
    }
}
