use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::Workbook;
use tracing::error;

use super::BatchService;
use crate::models::{ApiResponse, ErrorCode, ExportParams};
use crate::utils::pdf::PdfReport;

/// 批次学生名册（xlsx / pdf），每个科目一列出勤率，末列为总体出勤率
pub async fn export_batch_students(
    service: &BatchService,
    id: i64,
    params: ExportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let batch = match storage.get_batch_by_id(id).await {
        Ok(Some(batch)) => batch,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                format!("Batch {id} not found"),
            )));
        }
        Err(e) => {
            error!("Failed to load batch {}: {}", id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export batch students",
            )));
        }
    };

    let students = match storage.list_students_by_batch(id).await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to list students of batch {}: {}", id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export batch students",
            )));
        }
    };

    let subjects = match storage.list_subjects_by_batch(id).await {
        Ok(subjects) => subjects,
        Err(e) => {
            error!("Failed to list subjects of batch {}: {}", id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export batch students",
            )));
        }
    };

    // 每个科目一张出勤率映射，外加总体
    let mut per_subject: Vec<(String, HashMap<i64, f64>)> = Vec::with_capacity(subjects.len());
    for subject in &subjects {
        let rows = match storage.batch_attendance_rows(id, Some(subject.subject.id)).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(
                    "Failed to load attendance for subject {}: {}",
                    subject.subject.id, e
                );
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    "Failed to export batch students",
                )));
            }
        };
        let map = rows.into_iter().map(|r| (r.student_id, r.percentage)).collect();
        per_subject.push((subject.subject.name.clone(), map));
    }

    let overall: HashMap<i64, f64> = match storage.batch_attendance_rows(id, None).await {
        Ok(rows) => rows.into_iter().map(|r| (r.student_id, r.percentage)).collect(),
        Err(e) => {
            error!("Failed to load overall attendance for batch {}: {}", id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export batch students",
            )));
        }
    };

    match params.format.as_str() {
        "pdf" => export_pdf(&batch, &students, &per_subject, &overall),
        "xlsx" => export_xlsx(&batch, &students, &per_subject, &overall),
        other => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unsupported export format: {other}"),
        ))),
    }
}

fn export_xlsx(
    batch: &crate::models::batches::entities::Batch,
    students: &[crate::models::students::entities::Student],
    per_subject: &[(String, HashMap<i64, f64>)],
    overall: &HashMap<i64, f64>,
) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let _ = sheet.write(0, 0, "Roll Number");
    let _ = sheet.write(0, 1, "Enrollment Number");
    let _ = sheet.write(0, 2, "Name");
    let mut col = 3u16;
    for (subject_name, _) in per_subject {
        let _ = sheet.write(0, col, format!("{subject_name} %"));
        col += 1;
    }
    let _ = sheet.write(0, col, "Overall %");

    for (row, student) in students.iter().enumerate() {
        let row = (row + 1) as u32;
        let _ = sheet.write(row, 0, &student.roll_number);
        let _ = sheet.write(row, 1, &student.enrollment_number);
        let _ = sheet.write(row, 2, &student.name);
        let mut col = 3u16;
        for (_, map) in per_subject {
            let _ = sheet.write(row, col, map.get(&student.id).copied().unwrap_or(0.0));
            col += 1;
        }
        let _ = sheet.write(row, col, overall.get(&student.id).copied().unwrap_or(0.0));
    }

    match workbook.save_to_buffer() {
        Ok(buffer) => Ok(HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"batch_{}_students.xlsx\"",
                    batch.batch_code
                ),
            ))
            .body(buffer)),
        Err(e) => {
            error!("Failed to render students workbook: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render workbook",
            )))
        }
    }
}

fn export_pdf(
    batch: &crate::models::batches::entities::Batch,
    students: &[crate::models::students::entities::Student],
    per_subject: &[(String, HashMap<i64, f64>)],
    overall: &HashMap<i64, f64>,
) -> ActixResult<HttpResponse> {
    let render = || -> crate::errors::Result<Vec<u8>> {
        let mut report = PdfReport::new(&format!("Student Roster: {}", batch.name))?;
        report.key_value("Batch Code", &batch.batch_code);
        report.key_value("Students", &students.len().to_string());

        let mut headers: Vec<String> = vec!["Roll".to_string(), "Name".to_string()];
        for (subject_name, _) in per_subject {
            headers.push(format!("{subject_name} %"));
        }
        headers.push("Overall %".to_string());
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

        let rows: Vec<Vec<String>> = students
            .iter()
            .map(|student| {
                let mut row = vec![student.roll_number.clone(), student.name.clone()];
                for (_, map) in per_subject {
                    row.push(format!("{:.1}", map.get(&student.id).copied().unwrap_or(0.0)));
                }
                row.push(format!(
                    "{:.1}",
                    overall.get(&student.id).copied().unwrap_or(0.0)
                ));
                row
            })
            .collect();
        report.table(&header_refs, &rows);

        report.finish()
    };

    match render() {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"batch_{}_students.pdf\"",
                    batch.batch_code
                ),
            ))
            .body(bytes)),
        Err(e) => {
            error!("Failed to render students PDF: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render PDF",
            )))
        }
    }
}
