use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ExportParams;
use crate::services::performance::PerformanceService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 PerformanceService 实例
static PERFORMANCE_SERVICE: Lazy<PerformanceService> = Lazy::new(PerformanceService::new_lazy);

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

pub async fn teacher_performance(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE
        .teacher_performance(teacher_id.0, &req)
        .await
}

pub async fn export_performance_xlsx(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE
        .export_performance(teacher_id.0, xlsx(), &req)
        .await
}

pub async fn export_performance_pdf(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    PERFORMANCE_SERVICE
        .export_performance(teacher_id.0, pdf(), &req)
        .await
}

// 配置路由
pub fn configure_performance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher-performance")
            .wrap(middlewares::RequireJWT)
            .route("/{teacher_id}", web::get().to(teacher_performance))
            .route(
                "/{teacher_id}/export/xlsx",
                web::get().to(export_performance_xlsx),
            )
            .route(
                "/{teacher_id}/export/pdf",
                web::get().to(export_performance_pdf),
            ),
    );
}
