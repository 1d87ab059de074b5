use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::diary::requests::{CreateDiaryEntryRequest, DiaryListParams};
use crate::services::diary::DiaryService;

// 懒加载的全局 DiaryService 实例
static DIARY_SERVICE: Lazy<DiaryService> = Lazy::new(DiaryService::new_lazy);

pub async fn create_entry(
    req: HttpRequest,
    entry_data: web::Json<CreateDiaryEntryRequest>,
) -> ActixResult<HttpResponse> {
    DIARY_SERVICE.create_entry(entry_data.into_inner(), &req).await
}

pub async fn list_entries(
    req: HttpRequest,
    query: web::Query<DiaryListParams>,
) -> ActixResult<HttpResponse> {
    DIARY_SERVICE.list_entries(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_diary_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teaching-diary")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_entry))
            .route("", web::get().to(list_entries)),
    );
}
