use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SyllabusService;
use crate::models::{
    ApiResponse, ErrorCode, syllabus::responses::SyllabusProgressResponse,
};

pub async fn syllabus_progress(
    service: &SyllabusService,
    syllabus_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.syllabus_topic_counts(syllabus_id).await {
        Ok(Some((total, completed))) => {
            let progress = build_progress(syllabus_id, total, completed);
            Ok(HttpResponse::Ok().json(ApiResponse::success(progress, "获取大纲进度成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SyllabusNotFound,
            format!("Syllabus {syllabus_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to load progress of syllabus {}: {}", syllabus_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get syllabus progress",
            )))
        }
    }
}

/// 完成率 = completed / total * 100，零知识点时为 0
pub fn build_progress(syllabus_id: i64, total: i64, completed: i64) -> SyllabusProgressResponse {
    let percentage = if total == 0 {
        0.0
    } else {
        ((completed as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
    };
    SyllabusProgressResponse {
        syllabus_id,
        total_topics: total,
        completed_topics: completed,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_zero_topics() {
        let progress = build_progress(1, 0, 0);
        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn test_progress_partial() {
        let progress = build_progress(1, 8, 3);
        assert_eq!(progress.percentage, 37.5);
    }

    #[test]
    fn test_progress_complete() {
        let progress = build_progress(1, 5, 5);
        assert_eq!(progress.percentage, 100.0);
    }
}
