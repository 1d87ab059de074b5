use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherAttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    teacher_attendance::{
        entities::{TeacherAttendanceRecord, TeacherAttendanceStatus},
        responses::TeacherAttendanceSummary,
    },
};

pub async fn summary(
    service: &TeacherAttendanceService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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
                "Failed to summarize teacher attendance",
            )));
        }
    }

    match storage.list_teacher_attendance_records(teacher_id).await {
        Ok(records) => {
            let summary = summarize(teacher_id, &records);
            Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "获取教师考勤汇总成功")))
        }
        Err(e) => {
            error!(
                "Failed to load attendance records for teacher {}: {}",
                teacher_id, e
            );
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to summarize teacher attendance",
            )))
        }
    }
}

/// 按状态计数并计算出勤率。空历史为 0.00。
pub fn summarize(teacher_id: i64, records: &[TeacherAttendanceRecord]) -> TeacherAttendanceSummary {
    let mut present = 0i64;
    let mut absent = 0i64;
    let mut on_leave = 0i64;

    for record in records {
        match record.status {
            TeacherAttendanceStatus::Present => present += 1,
            TeacherAttendanceStatus::Absent => absent += 1,
            TeacherAttendanceStatus::OnLeave => on_leave += 1,
        }
    }

    let total = records.len() as i64;
    let percentage = if total == 0 {
        0.0
    } else {
        ((present as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
    };

    TeacherAttendanceSummary {
        teacher_id,
        total,
        present,
        absent,
        on_leave,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, status: TeacherAttendanceStatus) -> TeacherAttendanceRecord {
        TeacherAttendanceRecord {
            id,
            teacher_id: 1,
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            status,
            remarks: None,
            marked_by: Some(99),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_summary_empty_history() {
        let summary = summarize(1, &[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn test_summary_counts_and_percentage() {
        let records = vec![
            record(1, TeacherAttendanceStatus::Present),
            record(2, TeacherAttendanceStatus::Present),
            record(3, TeacherAttendanceStatus::Present),
            record(4, TeacherAttendanceStatus::Absent),
        ];
        let summary = summarize(1, &records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.present, 3);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.on_leave, 0);
        // 3 / 4 = 75%
        assert_eq!(summary.percentage, 75.0);
    }

    #[test]
    fn test_summary_all_on_leave() {
        let records = vec![
            record(1, TeacherAttendanceStatus::OnLeave),
            record(2, TeacherAttendanceStatus::OnLeave),
        ];
        let summary = summarize(1, &records);
        assert_eq!(summary.on_leave, 2);
        assert_eq!(summary.percentage, 0.0);
    }
}
