use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::leaves::requests::{
    ApplyLeaveRequest, LeaveListParams, UpdateLeaveStatusRequest,
};
use crate::models::teachers::entities::TeacherRole;
use crate::services::leaves::LeaveService;
use crate::utils::SafeIDI64;

// 懒加载的全局 LeaveService 实例
static LEAVE_SERVICE: Lazy<LeaveService> = Lazy::new(LeaveService::new_lazy);

pub async fn apply_leave(
    req: HttpRequest,
    apply_data: web::Json<ApplyLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.apply_leave(apply_data.into_inner(), &req).await
}

pub async fn my_leaves(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.my_leaves(&req).await
}

pub async fn list_leaves(
    req: HttpRequest,
    query: web::Query<LeaveListParams>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.list_leaves(query.into_inner(), &req).await
}

pub async fn update_leave_status(
    req: HttpRequest,
    leave_id: SafeIDI64,
    status_data: web::Json<UpdateLeaveStatusRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE
        .update_leave_status(leave_id.0, status_data.into_inner(), &req)
        .await
}

// 配置路由。列表与审批仅管理员可用。
pub fn configure_leave_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/leaves")
            .wrap(middlewares::RequireJWT)
            .route("/apply", web::post().to(apply_leave))
            .route("/my", web::get().to(my_leaves))
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_leaves)
                        .wrap(middlewares::RequireRole::new_any(TeacherRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}/status").route(
                    web::put()
                        .to(update_leave_status)
                        .wrap(middlewares::RequireRole::new_any(TeacherRole::admin_roles())),
                ),
            ),
    );
}
