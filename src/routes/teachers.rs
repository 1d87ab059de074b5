use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teachers::entities::TeacherRole;
use crate::models::teachers::requests::{
    LoginRequest, RegisterTeacherRequest, TeacherListParams, UpdateProfileRequest,
};
use crate::services::teachers::TeacherService;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn register(
    req: HttpRequest,
    register_data: web::Json<RegisterTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .register(register_data.into_inner(), &req)
        .await
}

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn me(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.me(&req).await
}

pub async fn update_me(
    req: HttpRequest,
    update_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_profile(update_data.into_inner(), &req)
        .await
}

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teachers(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(me))
                    .route("/me", web::put().to(update_me))
                    .service(
                        web::resource("").route(
                            web::get()
                                .to(list_teachers)
                                .wrap(middlewares::RequireRole::new_any(TeacherRole::admin_roles())),
                        ),
                    ),
            ),
    );
}
