use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::Workbook;
use tracing::error;

use super::PerformanceService;
use super::report::build_report;
use crate::models::{
    ApiResponse, ErrorCode, ExportParams, performance::responses::TeacherPerformanceResponse,
};
use crate::utils::pdf::PdfReport;

/// 绩效报表（xlsx / pdf），指标/数值两列
pub async fn export_performance(
    service: &PerformanceService,
    teacher_id: i64,
    params: ExportParams,
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
                ErrorCode::ExportFailed,
                "Failed to export performance report",
            )));
        }
    };

    let report = match build_report(&storage, teacher_id, &teacher.name).await {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to compute performance for {}: {}", teacher_id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export performance report",
            )));
        }
    };

    match params.format.as_str() {
        "pdf" => export_pdf(&report),
        "xlsx" => export_xlsx(&report),
        other => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unsupported export format: {other}"),
        ))),
    }
}

fn metric_rows(report: &TeacherPerformanceResponse) -> Vec<(String, String)> {
    vec![
        ("Teacher".to_string(), report.teacher_name.clone()),
        (
            "Teacher Attendance %".to_string(),
            format!("{:.2}", report.teacher_attendance_percentage),
        ),
        (
            "Avg Student Attendance %".to_string(),
            format!("{:.2}", report.avg_student_attendance_percentage),
        ),
        (
            "Avg Assessment %".to_string(),
            format!("{:.2}", report.avg_assessment_percentage),
        ),
        (
            "Performance Score".to_string(),
            format!("{:.2}", report.performance_score),
        ),
    ]
}

fn export_xlsx(report: &TeacherPerformanceResponse) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let _ = sheet.write(0, 0, "Metric");
    let _ = sheet.write(0, 1, "Value");
    for (index, (metric, value)) in metric_rows(report).iter().enumerate() {
        let row = (index + 1) as u32;
        let _ = sheet.write(row, 0, metric);
        let _ = sheet.write(row, 1, value);
    }

    match workbook.save_to_buffer() {
        Ok(buffer) => Ok(HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"performance_{}.xlsx\"",
                    report.teacher_id
                ),
            ))
            .body(buffer)),
        Err(e) => {
            error!("Failed to render performance workbook: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render workbook",
            )))
        }
    }
}

fn export_pdf(report: &TeacherPerformanceResponse) -> ActixResult<HttpResponse> {
    let render = || -> crate::errors::Result<Vec<u8>> {
        let mut pdf = PdfReport::new(&format!("Performance Report: {}", report.teacher_name))?;
        for (metric, value) in metric_rows(report) {
            pdf.key_value(&metric, &value);
        }
        pdf.finish()
    };

    match render() {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"performance_{}.pdf\"",
                    report.teacher_id
                ),
            ))
            .body(bytes)),
        Err(e) => {
            error!("Failed to render performance PDF: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render PDF",
            )))
        }
    }
}
