use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::Workbook;
use tracing::error;

use super::BatchService;
use crate::models::{
    ApiResponse, ErrorCode, ExportParams, batches::responses::BatchDetailResponse,
};
use crate::utils::pdf::PdfReport;

/// 批次详情报表（xlsx / pdf）
pub async fn export_batch(
    service: &BatchService,
    id: i64,
    params: ExportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let detail = match storage.get_batch_detail(id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                format!("Batch {id} not found"),
            )));
        }
        Err(e) => {
            error!("Failed to load batch {} for export: {}", id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export batch",
            )));
        }
    };

    match params.format.as_str() {
        "pdf" => export_pdf(&detail),
        "xlsx" => export_xlsx(&detail),
        other => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unsupported export format: {other}"),
        ))),
    }
}

fn export_xlsx(detail: &BatchDetailResponse) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();

    // 学生工作表
    let sheet = workbook.add_worksheet();
    if let Err(e) = sheet.set_name("Students") {
        error!("Failed to name worksheet: {}", e);
    }
    let headers = ["Roll Number", "Enrollment Number", "Name", "Email", "Phone"];
    for (col, header) in headers.iter().enumerate() {
        if let Err(e) = sheet.write(0, col as u16, *header) {
            error!("Failed to write header: {}", e);
        }
    }
    for (row, student) in detail.students.iter().enumerate() {
        let row = (row + 1) as u32;
        let _ = sheet.write(row, 0, &student.roll_number);
        let _ = sheet.write(row, 1, &student.enrollment_number);
        let _ = sheet.write(row, 2, &student.name);
        let _ = sheet.write(row, 3, student.email.as_deref().unwrap_or(""));
        let _ = sheet.write(row, 4, student.phone.as_deref().unwrap_or(""));
    }

    // 科目工作表
    let sheet = workbook.add_worksheet();
    if let Err(e) = sheet.set_name("Subjects") {
        error!("Failed to name worksheet: {}", e);
    }
    let headers = ["Code", "Name", "Semester", "Credits"];
    for (col, header) in headers.iter().enumerate() {
        let _ = sheet.write(0, col as u16, *header);
    }
    for (row, subject) in detail.subjects.iter().enumerate() {
        let row = (row + 1) as u32;
        let _ = sheet.write(row, 0, &subject.code);
        let _ = sheet.write(row, 1, &subject.name);
        let _ = sheet.write(row, 2, subject.semester.map(|s| s.to_string()).unwrap_or_default());
        let _ = sheet.write(row, 3, subject.credits.map(|c| c.to_string()).unwrap_or_default());
    }

    // 任课教师工作表
    let sheet = workbook.add_worksheet();
    if let Err(e) = sheet.set_name("Teachers") {
        error!("Failed to name worksheet: {}", e);
    }
    let headers = ["Teacher Code", "Name", "Department"];
    for (col, header) in headers.iter().enumerate() {
        let _ = sheet.write(0, col as u16, *header);
    }
    for (row, teacher) in detail.teachers.iter().enumerate() {
        let row = (row + 1) as u32;
        let _ = sheet.write(row, 0, &teacher.teacher_code);
        let _ = sheet.write(row, 1, &teacher.name);
        let _ = sheet.write(row, 2, &teacher.department);
    }

    match workbook.save_to_buffer() {
        Ok(buffer) => Ok(HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"batch_{}.xlsx\"",
                    detail.batch.batch_code
                ),
            ))
            .body(buffer)),
        Err(e) => {
            error!("Failed to render batch workbook: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render workbook",
            )))
        }
    }
}

fn export_pdf(detail: &BatchDetailResponse) -> ActixResult<HttpResponse> {
    let render = || -> crate::errors::Result<Vec<u8>> {
        let mut report = PdfReport::new(&format!("Batch Report: {}", detail.batch.name))?;
        report.key_value("Batch Code", &detail.batch.batch_code);
        report.key_value("Department", &detail.batch.department);
        report.key_value("Year", &detail.batch.year.to_string());
        report.key_value("Students", &detail.students.len().to_string());
        report.key_value("Subjects", &detail.subjects.len().to_string());

        report.heading("Students");
        let rows: Vec<Vec<String>> = detail
            .students
            .iter()
            .map(|s| {
                vec![
                    s.roll_number.clone(),
                    s.enrollment_number.clone(),
                    s.name.clone(),
                ]
            })
            .collect();
        report.table(&["Roll", "Enrollment", "Name"], &rows);

        report.heading("Subjects");
        let rows: Vec<Vec<String>> = detail
            .subjects
            .iter()
            .map(|s| vec![s.code.clone(), s.name.clone()])
            .collect();
        report.table(&["Code", "Name"], &rows);

        report.heading("Teachers");
        let rows: Vec<Vec<String>> = detail
            .teachers
            .iter()
            .map(|t| vec![t.teacher_code.clone(), t.name.clone(), t.department.clone()])
            .collect();
        report.table(&["Code", "Name", "Department"], &rows);

        report.finish()
    };

    match render() {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"batch_{}.pdf\"",
                    detail.batch.batch_code
                ),
            ))
            .body(bytes)),
        Err(e) => {
            error!("Failed to render batch PDF: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render PDF",
            )))
        }
    }
}
