use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::requests::{TeacherListParams, TeacherListQuery},
};

pub async fn list_teachers(
    service: &TeacherService,
    params: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = TeacherListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        department: params.department,
        search: params.search,
    };

    match storage.list_teachers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取教师列表成功"))),
        Err(e) => {
            error!("Failed to list teachers: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list teachers",
            )))
        }
    }
}
