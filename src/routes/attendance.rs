use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    BatchAttendanceExportParams, BatchAttendanceParams, MarkAttendanceRequest,
};
use crate::services::attendance::AttendanceService;
use crate::utils::{SafeBatchIdI64, SafeLectureIdI64, SafeStudentIdI64};

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn mark_attendance(
    req: HttpRequest,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(mark_data.into_inner(), &req)
        .await
}

pub async fn get_session_attendance(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .get_session_attendance(lecture_id.0, &req)
        .await
}

pub async fn student_summary(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.student_summary(student_id.0, &req).await
}

pub async fn batch_summary(
    req: HttpRequest,
    batch_id: SafeBatchIdI64,
    query: web::Query<BatchAttendanceParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .batch_summary(batch_id.0, query.into_inner(), &req)
        .await
}

pub async fn batch_analytics(
    req: HttpRequest,
    batch_id: SafeBatchIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.batch_analytics(batch_id.0, &req).await
}

pub async fn export_batch_attendance(
    req: HttpRequest,
    batch_id: SafeBatchIdI64,
    query: web::Query<BatchAttendanceExportParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .export_batch_attendance(batch_id.0, query.into_inner(), &req)
        .await
}

pub async fn export_batch_attendance_pdf(
    req: HttpRequest,
    batch_id: SafeBatchIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .export_batch_attendance_pdf(batch_id.0, &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .route("/mark", web::post().to(mark_attendance))
            .route("/student/{student_id}", web::get().to(student_summary))
            .route("/batch/{batch_id}", web::get().to(batch_summary))
            .route(
                "/batch/{batch_id}/analytics",
                web::get().to(batch_analytics),
            )
            .route(
                "/batch/{batch_id}/export",
                web::get().to(export_batch_attendance),
            )
            .route(
                "/batch/{batch_id}/export/pdf",
                web::get().to(export_batch_attendance_pdf),
            )
            .route(
                "/{lecture_session_id}",
                web::get().to(get_session_attendance),
            ),
    );
}
