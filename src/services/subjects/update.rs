use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::UpdateSubjectRequest};

pub async fn update_subject(
    service: &SubjectService,
    id: i64,
    update_data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(teacher_id) = update_data.teacher_id {
        match storage.get_teacher_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    format!("Teacher {teacher_id} not found"),
                )));
            }
            Err(e) => {
                error!("Teacher lookup failed: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Subject update failed",
                )));
            }
        }
    }

    match storage.update_subject(id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "科目更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            format!("Subject {id} not found"),
        ))),
        Err(e) => {
            error!("Subject update failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::SubjectUpdateFailed,
                "Subject update failed",
            )))
        }
    }
}
