use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::BatchAttendanceParams, responses::BatchAttendanceSummary},
};

pub async fn batch_summary(
    service: &AttendanceService,
    batch_id: i64,
    params: BatchAttendanceParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_batch_by_id(batch_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                format!("Batch {batch_id} not found"),
            )));
        }
        Err(e) => {
            error!("Batch lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get batch attendance",
            )));
        }
    }

    match storage.batch_attendance_rows(batch_id, params.subject_id).await {
        Ok(rows) => {
            let summary = BatchAttendanceSummary {
                batch_id,
                subject_id: params.subject_id,
                rows,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "获取批次考勤成功")))
        }
        Err(e) => {
            error!("Failed to load attendance for batch {}: {}", batch_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to get batch attendance",
            )))
        }
    }
}
