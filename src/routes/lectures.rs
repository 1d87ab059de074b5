use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lectures::requests::{CreateLectureRequest, UpdateLectureRequest};
use crate::services::lectures::LectureService;

// 懒加载的全局 LectureService 实例
static LECTURE_SERVICE: Lazy<LectureService> = Lazy::new(LectureService::new_lazy);

pub async fn create_lecture(
    req: HttpRequest,
    lecture_data: web::Json<CreateLectureRequest>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .create_lecture(lecture_data.into_inner(), &req)
        .await
}

pub async fn my_lectures(req: HttpRequest) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE.my_lectures(&req).await
}

pub async fn update_lecture(
    req: HttpRequest,
    update_data: web::Json<UpdateLectureRequest>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .update_lecture(update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_lecture_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lectures")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_lecture))
            .route("", web::put().to(update_lecture))
            .route("/my", web::get().to(my_lectures)),
    );
}
