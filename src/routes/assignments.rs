use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ExportParams;
use crate::models::assignments::requests::{
    CreateAssignmentRequest, GradeSubmissionRequest, SubmitAssignmentRequest,
};
use crate::services::assignments::AssignmentService;
use crate::utils::{SafeBatchIdI64, SafeIDI64, SafeSubjectIdI64};

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

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

pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(assignment_data.into_inner(), &req)
        .await
}

pub async fn list_by_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_by_subject(subject_id.0, &req).await
}

pub async fn submit_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    submit_data: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment(assignment_id.0, submit_data.into_inner(), &req)
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    let (assignment_id, student_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .grade_submission(assignment_id, student_id, grade_data.into_inner(), &req)
        .await
}

pub async fn export_assignment_xlsx(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .export_assignment(assignment_id.0, xlsx(), &req)
        .await
}

pub async fn export_assignment_pdf(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .export_assignment(assignment_id.0, pdf(), &req)
        .await
}

pub async fn export_batch_assignments_xlsx(
    req: HttpRequest,
    batch_id: SafeBatchIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .export_batch_assignments(batch_id.0, xlsx(), &req)
        .await
}

pub async fn export_batch_assignments_pdf(
    req: HttpRequest,
    batch_id: SafeBatchIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .export_batch_assignments(batch_id.0, pdf(), &req)
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_assignment))
            .route("/subject/{subject_id}", web::get().to(list_by_subject))
            .route(
                "/batch/{batch_id}/export/xlsx",
                web::get().to(export_batch_assignments_xlsx),
            )
            .route(
                "/batch/{batch_id}/export/pdf",
                web::get().to(export_batch_assignments_pdf),
            )
            .route("/{id}/submit", web::post().to(submit_assignment))
            .route("/{id}/grade/{student_id}", web::post().to(grade_submission))
            .route("/{id}/export/xlsx", web::get().to(export_assignment_xlsx))
            .route("/{id}/export/pdf", web::get().to(export_assignment_pdf)),
    );
}
