use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::Workbook;
use tracing::error;

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode, ExportParams,
    assignments::{entities::Assignment, responses::SubmissionWithStudent},
};
use crate::utils::pdf::PdfReport;

/// 单作业提交报表（xlsx / pdf）
pub async fn export_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    params: ExportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                format!("Assignment {assignment_id} not found"),
            )));
        }
        Err(e) => {
            error!("Assignment lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export assignment",
            )));
        }
    };

    let submissions = match storage.list_submissions_with_students(assignment_id).await {
        Ok(submissions) => submissions,
        Err(e) => {
            error!(
                "Failed to list submissions of assignment {}: {}",
                assignment_id, e
            );
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export assignment",
            )));
        }
    };

    match params.format.as_str() {
        "pdf" => export_pdf(&assignment, &submissions),
        "xlsx" => export_xlsx(&assignment, &submissions),
        other => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unsupported export format: {other}"),
        ))),
    }
}

fn export_xlsx(
    assignment: &Assignment,
    submissions: &[SubmissionWithStudent],
) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let headers = ["Roll Number", "Student", "Status", "Marks", "Remarks"];
    for (col, header) in headers.iter().enumerate() {
        let _ = sheet.write(0, col as u16, *header);
    }
    for (index, row) in submissions.iter().enumerate() {
        let r = (index + 1) as u32;
        let _ = sheet.write(r, 0, &row.roll_number);
        let _ = sheet.write(r, 1, &row.student_name);
        let _ = sheet.write(r, 2, row.submission.status.to_string());
        let _ = sheet.write(
            r,
            3,
            row.submission
                .marks
                .map(|m| format!("{m:.2}"))
                .unwrap_or_default(),
        );
        let _ = sheet.write(r, 4, row.submission.remarks.as_deref().unwrap_or(""));
    }

    match workbook.save_to_buffer() {
        Ok(buffer) => Ok(HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"assignment_{}.xlsx\"", assignment.id),
            ))
            .body(buffer)),
        Err(e) => {
            error!("Failed to render assignment workbook: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render workbook",
            )))
        }
    }
}

fn export_pdf(
    assignment: &Assignment,
    submissions: &[SubmissionWithStudent],
) -> ActixResult<HttpResponse> {
    let render = || -> crate::errors::Result<Vec<u8>> {
        let mut report = PdfReport::new(&format!("Assignment Report: {}", assignment.title))?;
        report.key_value("Due Date", &assignment.due_date.to_string());
        report.key_value("Max Marks", &format!("{:.1}", assignment.max_marks));
        report.key_value("Submissions", &submissions.len().to_string());

        report.heading("Submissions");
        let rows: Vec<Vec<String>> = submissions
            .iter()
            .map(|row| {
                vec![
                    row.roll_number.clone(),
                    row.student_name.clone(),
                    row.submission.status.to_string(),
                    row.submission
                        .marks
                        .map(|m| format!("{m:.2}"))
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();
        report.table(&["Roll", "Student", "Status", "Marks"], &rows);

        report.finish()
    };

    match render() {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"assignment_{}.pdf\"", assignment.id),
            ))
            .body(bytes)),
        Err(e) => {
            error!("Failed to render assignment PDF: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render PDF",
            )))
        }
    }
}
