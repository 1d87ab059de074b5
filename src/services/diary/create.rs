use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DiaryService;
use crate::errors::EduSysError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, diary::requests::CreateDiaryEntryRequest};

pub async fn create_entry(
    service: &DiaryService,
    create_data: CreateDiaryEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

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
                ErrorCode::DiaryCreationFailed,
                "Failed to create diary entry",
            )));
        }
    }

    match storage.create_diary_entry(teacher_id, create_data).await {
        Ok(entry) => Ok(HttpResponse::Created().json(ApiResponse::success(entry, "教学日志创建成功"))),
        // 引用了不存在的知识点，整个事务已回滚
        Err(EduSysError::NotFound(msg)) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::TopicNotFound, msg)))
        }
        Err(e) => {
            error!("Failed to create diary entry: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DiaryCreationFailed,
                "Failed to create diary entry",
            )))
        }
    }
}
