use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DiaryService;
use crate::models::{
    ApiResponse, ErrorCode,
    diary::{requests::DiaryListParams, responses::DiaryListResponse},
};

pub async fn list_entries(
    service: &DiaryService,
    params: DiaryListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_diary_entries(params).await {
        Ok(items) => {
            let response = DiaryListResponse {
                count: items.len(),
                items,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取教学日志成功")))
        }
        Err(e) => {
            error!("Failed to list diary entries: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list diary entries",
            )))
        }
    }
}
