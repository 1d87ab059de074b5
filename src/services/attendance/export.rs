use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::Workbook;
use tracing::error;

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::BatchAttendanceExportParams, responses::BatchAttendanceRow},
};

/// 批次考勤导出（xlsx / csv）
pub async fn export_batch_attendance(
    service: &AttendanceService,
    batch_id: i64,
    params: BatchAttendanceExportParams,
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
                "Failed to export attendance",
            )));
        }
    };

    let rows = match storage.batch_attendance_rows(batch_id, params.subject_id).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to load attendance for batch {}: {}", batch_id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export attendance",
            )));
        }
    };

    match params.format.as_str() {
        "csv" => export_csv(&batch.batch_code, &rows),
        "xlsx" => export_xlsx(&batch.batch_code, &rows),
        other => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unsupported export format: {other}"),
        ))),
    }
}

fn export_xlsx(batch_code: &str, rows: &[BatchAttendanceRow]) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let headers = ["Roll Number", "Name", "Total Sessions", "Attended", "Percentage"];
    for (col, header) in headers.iter().enumerate() {
        let _ = sheet.write(0, col as u16, *header);
    }
    for (index, row) in rows.iter().enumerate() {
        let r = (index + 1) as u32;
        let _ = sheet.write(r, 0, &row.roll_number);
        let _ = sheet.write(r, 1, &row.name);
        let _ = sheet.write(r, 2, row.total as f64);
        let _ = sheet.write(r, 3, row.attended as f64);
        let _ = sheet.write(r, 4, row.percentage);
    }

    match workbook.save_to_buffer() {
        Ok(buffer) => Ok(HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"attendance_{batch_code}.xlsx\""),
            ))
            .body(buffer)),
        Err(e) => {
            error!("Failed to render attendance workbook: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render workbook",
            )))
        }
    }
}

fn export_csv(batch_code: &str, rows: &[BatchAttendanceRow]) -> ActixResult<HttpResponse> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let render = || -> Result<Vec<u8>, csv::Error> {
        writer.write_record(["roll_number", "name", "total", "attended", "percentage"])?;
        for row in rows {
            writer.write_record([
                row.roll_number.as_str(),
                row.name.as_str(),
                &row.total.to_string(),
                &row.attended.to_string(),
                &format!("{:.2}", row.percentage),
            ])?;
        }
        writer
            .into_inner()
            .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))
    };

    match render() {
        Ok(buffer) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"attendance_{batch_code}.csv\""),
            ))
            .body(buffer)),
        Err(e) => {
            error!("Failed to render attendance CSV: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render CSV",
            )))
        }
    }
}
