use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teacher_attendance::requests::MarkTeacherAttendanceRequest;
use crate::models::teachers::entities::TeacherRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::teacher_attendance::TeacherAttendanceService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 TeacherAttendanceService 实例
static TEACHER_ATTENDANCE_SERVICE: Lazy<TeacherAttendanceService> =
    Lazy::new(TeacherAttendanceService::new_lazy);

pub async fn mark_attendance(
    req: HttpRequest,
    mark_data: web::Json<MarkTeacherAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_ATTENDANCE_SERVICE
        .mark_attendance(mark_data.into_inner(), &req)
        .await
}

pub async fn list_by_date(
    req: HttpRequest,
    date: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let date = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                ErrorCode::BadRequest,
                "Invalid date, expected YYYY-MM-DD",
            )));
        }
    };
    TEACHER_ATTENDANCE_SERVICE.list_by_date(date, &req).await
}

pub async fn summary(req: HttpRequest, teacher_id: SafeTeacherIdI64) -> ActixResult<HttpResponse> {
    TEACHER_ATTENDANCE_SERVICE.summary(teacher_id.0, &req).await
}

// 配置路由。登记仅管理员可用。
pub fn configure_teacher_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher-attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/mark").route(
                    web::post()
                        .to(mark_attendance)
                        .wrap(middlewares::RequireRole::new_any(TeacherRole::admin_roles())),
                ),
            )
            .route("/date/{date}", web::get().to(list_by_date))
            .route("/summary/{teacher_id}", web::get().to(summary)),
    );
}
