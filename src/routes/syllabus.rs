use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::syllabus::requests::{CompleteTopicRequest, CreateSyllabusRequest};
use crate::services::syllabus::SyllabusService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SyllabusService 实例
static SYLLABUS_SERVICE: Lazy<SyllabusService> = Lazy::new(SyllabusService::new_lazy);

pub async fn create_syllabus(
    req: HttpRequest,
    syllabus_data: web::Json<CreateSyllabusRequest>,
) -> ActixResult<HttpResponse> {
    SYLLABUS_SERVICE
        .create_syllabus(syllabus_data.into_inner(), &req)
        .await
}

pub async fn complete_topic(
    req: HttpRequest,
    path: web::Path<(i64, i32, i32)>,
    complete_data: web::Json<CompleteTopicRequest>,
) -> ActixResult<HttpResponse> {
    let (syllabus_id, module_position, topic_position) = path.into_inner();
    SYLLABUS_SERVICE
        .complete_topic(
            syllabus_id,
            module_position,
            topic_position,
            complete_data.into_inner(),
            &req,
        )
        .await
}

pub async fn syllabus_progress(
    req: HttpRequest,
    syllabus_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SYLLABUS_SERVICE.syllabus_progress(syllabus_id.0, &req).await
}

// 配置路由
pub fn configure_syllabus_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/syllabus")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_syllabus))
            .route(
                "/{id}/module/{module_position}/topic/{topic_position}/complete",
                web::patch().to(complete_topic),
            )
            .route("/{id}/progress", web::get().to(syllabus_progress)),
    );
}
