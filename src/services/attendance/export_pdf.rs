use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AttendanceService, analytics::compute_analytics};
use crate::models::{ApiResponse, ErrorCode, batches::entities::Batch};
use crate::utils::pdf::PdfReport;

/// 批次考勤分析 PDF：汇总指标、前后五名、分布柱状图
pub async fn export_batch_attendance_pdf(
    service: &AttendanceService,
    batch_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let batch = match storage.get_batch_by_id(batch_id).await {
        Ok(Some(batch)) => batch,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                format!("Batch {batch_id} not found"),
            )));
        }
        Err(e) => {
            error!("Batch lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export attendance report",
            )));
        }
    };

    let rows = match storage.batch_attendance_rows(batch_id, None).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to load attendance for batch {}: {}", batch_id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export attendance report",
            )));
        }
    };

    let analytics = compute_analytics(batch_id, rows.clone());

    match render_pdf(&batch, &rows, &analytics) {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"attendance_{}.pdf\"",
                    batch.batch_code
                ),
            ))
            .body(bytes)),
        Err(e) => {
            error!("Failed to render attendance PDF: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render PDF",
            )))
        }
    }
}

fn render_pdf(
    batch: &Batch,
    rows: &[crate::models::attendance::responses::BatchAttendanceRow],
    analytics: &crate::models::attendance::responses::BatchAttendanceAnalytics,
) -> crate::errors::Result<Vec<u8>> {
    let mut report = PdfReport::new(&format!("Attendance Report: {}", batch.name))?;
    report.key_value("Batch Code", &batch.batch_code);
    report.key_value("Total Students", &analytics.total_students.to_string());
    report.key_value(
        "Average Attendance",
        &format!("{:.2}%", analytics.average_percentage),
    );

    report.heading("Top Performers");
    let top_rows: Vec<Vec<String>> = analytics
        .top_performers
        .iter()
        .map(|r| {
            vec![
                r.roll_number.clone(),
                r.name.clone(),
                format!("{:.2}%", r.percentage),
            ]
        })
        .collect();
    report.table(&["Roll", "Name", "Attendance"], &top_rows);

    report.heading("Bottom Performers");
    let bottom_rows: Vec<Vec<String>> = analytics
        .bottom_performers
        .iter()
        .map(|r| {
            vec![
                r.roll_number.clone(),
                r.name.clone(),
                format!("{:.2}%", r.percentage),
            ]
        })
        .collect();
    report.table(&["Roll", "Name", "Attendance"], &bottom_rows);

    report.heading("Distribution");
    report.table(
        &["Bucket", "Students"],
        &[
            vec!["90-100%".to_string(), analytics.distribution.above90.to_string()],
            vec!["75-89%".to_string(), analytics.distribution.between75_89.to_string()],
            vec!["50-74%".to_string(), analytics.distribution.between50_74.to_string()],
            vec!["0-49%".to_string(), analytics.distribution.below50.to_string()],
        ],
    );

    report.heading("Per-Student Attendance");
    report.bar_chart(&chart_points(rows));

    report.finish()
}

/// 柱状图数据：每个学生一根柱（学号 → 出勤率）
fn chart_points(
    rows: &[crate::models::attendance::responses::BatchAttendanceRow],
) -> Vec<(String, f64)> {
    rows.iter()
        .map(|r| (r.roll_number.clone(), r.percentage))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::chart_points;
    use crate::models::attendance::responses::BatchAttendanceRow;

    fn row(student_id: i64, percentage: f64) -> BatchAttendanceRow {
        BatchAttendanceRow {
            student_id,
            roll_number: format!("R{student_id:03}"),
            name: format!("Student {student_id}"),
            total: 10,
            attended: (percentage / 10.0) as i64,
            percentage,
        }
    }

    #[test]
    fn test_chart_covers_every_student_in_order() {
        let rows = vec![
            row(1, 100.0),
            row(2, 30.0),
            row(3, 75.0),
            row(4, 0.0),
            row(5, 88.5),
            row(6, 42.0),
            row(7, 63.0),
        ];

        let points = chart_points(&rows);

        // 每个学生一根柱，顺序与输入一致，而不是只画前后五名
        assert_eq!(points.len(), rows.len());
        for (point, row) in points.iter().zip(rows.iter()) {
            assert_eq!(point.0, row.roll_number);
            assert_eq!(point.1, row.percentage);
        }
    }
}
