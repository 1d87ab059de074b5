use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::services::subjects::SubjectService;
use crate::utils::{SafeBatchIdI64, SafeIDI64};

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(subject_data.into_inner(), &req)
        .await
}

pub async fn list_subjects_by_batch(
    req: HttpRequest,
    batch_id: SafeBatchIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .list_subjects_by_batch(batch_id.0, &req)
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(subject_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(subject_id.0, &req).await
}

// 配置路由
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_subject))
            .route("/batch/{batch_id}", web::get().to(list_subjects_by_batch))
            .route("/{id}", web::put().to(update_subject))
            .route("/{id}", web::delete().to(delete_subject)),
    );
}
