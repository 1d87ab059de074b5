use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SyllabusService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, syllabus::requests::CompleteTopicRequest};

pub async fn complete_topic(
    service: &SyllabusService,
    syllabus_id: i64,
    module_position: i32,
    topic_position: i32,
    complete_data: CompleteTopicRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_teacher_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage
        .complete_topic(
            syllabus_id,
            module_position,
            topic_position,
            teacher_id,
            complete_data,
        )
        .await
    {
        Ok(Some(syllabus)) => Ok(HttpResponse::Ok().json(ApiResponse::success(syllabus, "知识点已标记完成"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TopicNotFound,
            format!(
                "No topic at module {module_position}, topic {topic_position} in syllabus {syllabus_id}"
            ),
        ))),
        Err(e) => {
            error!(
                "Failed to complete topic ({}, {}, {}): {}",
                syllabus_id, module_position, topic_position, e
            );
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to complete topic",
            )))
        }
    }
}
