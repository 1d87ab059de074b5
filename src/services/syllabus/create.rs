use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SyllabusService;
use crate::models::{ApiResponse, ErrorCode, syllabus::requests::CreateSyllabusRequest};

pub async fn create_syllabus(
    service: &SyllabusService,
    create_data: CreateSyllabusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_data.modules.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "At least one module is required",
        )));
    }
    for module in &create_data.modules {
        if module.title.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Module titles must not be empty",
            )));
        }
    }

    let storage = service.get_storage(request);

    // 科目必须存在且属于目标批次
    match storage.get_subject_by_id(create_data.subject_id).await {
        Ok(Some(subject)) => {
            if subject.batch_id != create_data.batch_id {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Subject does not belong to the given batch",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                format!("Subject {} not found", create_data.subject_id),
            )));
        }
        Err(e) => {
            error!("Subject lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Syllabus creation failed",
            )));
        }
    }

    match storage.create_syllabus(create_data).await {
        Ok(syllabus) => Ok(HttpResponse::Created().json(ApiResponse::success(syllabus, "大纲创建成功"))),
        Err(e) => {
            error!("Syllabus creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Syllabus creation failed",
            )))
        }
    }
}
