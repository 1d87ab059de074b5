use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::PerformanceService;
use super::score::{compute_performance_score, mean, round2};
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode, performance::responses::TeacherPerformanceResponse,
};
use crate::services::teacher_attendance::summary::summarize;
use crate::storage::Storage;

pub async fn teacher_performance(
    service: &PerformanceService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
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
                "Failed to compute performance",
            )));
        }
    };

    match build_report(&storage, teacher_id, &teacher.name).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "获取绩效评分成功"))),
        Err(e) => {
            error!("Failed to compute performance for {}: {}", teacher_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to compute performance",
            )))
        }
    }
}

/// 汇集三个分量并合成评分
pub(super) async fn build_report(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    teacher_name: &str,
) -> Result<TeacherPerformanceResponse> {
    let attendance_records = storage.list_teacher_attendance_records(teacher_id).await?;
    let teacher_attendance = summarize(teacher_id, &attendance_records).percentage;

    let session_ratios = storage.session_present_ratios_for_teacher(teacher_id).await?;
    let avg_student_attendance = round2(mean(&session_ratios));

    let assessment_ratios = storage
        .graded_submission_ratios_for_teacher(teacher_id)
        .await?;
    let avg_assessment = round2(mean(&assessment_ratios));

    Ok(TeacherPerformanceResponse {
        teacher_id,
        teacher_name: teacher_name.to_string(),
        teacher_attendance_percentage: teacher_attendance,
        avg_student_attendance_percentage: avg_student_attendance,
        avg_assessment_percentage: avg_assessment,
        performance_score: compute_performance_score(
            teacher_attendance,
            avg_student_attendance,
            avg_assessment,
        ),
    })
}
