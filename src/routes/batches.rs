use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ExportParams;
use crate::models::batches::requests::{BatchListParams, CreateBatchRequest, UpdateBatchRequest};
use crate::services::batches::BatchService;
use crate::utils::SafeIDI64;

// 懒加载的全局 BatchService 实例
static BATCH_SERVICE: Lazy<BatchService> = Lazy::new(BatchService::new_lazy);

fn xlsx() -> ExportParams {
    ExportParams {
        format: "xlsx".to_string(),
    }
}

fn pdf() -> ExportParams {
    ExportParams {
        format: "pdf".to_string(),
    }
}

pub async fn create_batch(
    req: HttpRequest,
    batch_data: web::Json<CreateBatchRequest>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.create_batch(batch_data.into_inner(), &req).await
}

pub async fn list_batches(
    req: HttpRequest,
    query: web::Query<BatchListParams>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.list_batches(query.into_inner(), &req).await
}

pub async fn get_batch(req: HttpRequest, batch_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.get_batch(batch_id.0, &req).await
}

pub async fn update_batch(
    req: HttpRequest,
    batch_id: SafeIDI64,
    update_data: web::Json<UpdateBatchRequest>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .update_batch(batch_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_batch(req: HttpRequest, batch_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.delete_batch(batch_id.0, &req).await
}

pub async fn export_batch_xlsx(req: HttpRequest, batch_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.export_batch(batch_id.0, xlsx(), &req).await
}

pub async fn export_batch_pdf(req: HttpRequest, batch_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.export_batch(batch_id.0, pdf(), &req).await
}

pub async fn export_batch_students_xlsx(
    req: HttpRequest,
    batch_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .export_batch_students(batch_id.0, xlsx(), &req)
        .await
}

pub async fn export_batch_students_pdf(
    req: HttpRequest,
    batch_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .export_batch_students(batch_id.0, pdf(), &req)
        .await
}

// 配置路由
pub fn configure_batch_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/batches")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_batch))
            .route("", web::get().to(list_batches))
            .route("/{id}", web::get().to(get_batch))
            .route("/{id}", web::put().to(update_batch))
            .route("/{id}", web::delete().to(delete_batch))
            .route("/{id}/export/xlsx", web::get().to(export_batch_xlsx))
            .route("/{id}/export/pdf", web::get().to(export_batch_pdf))
            .route(
                "/{id}/students/export/xlsx",
                web::get().to(export_batch_students_xlsx),
            )
            .route(
                "/{id}/students/export/pdf",
                web::get().to(export_batch_students_pdf),
            ),
    );
}
