use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::Workbook;
use tracing::error;

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode, ExportParams,
    assignments::{
        entities::Assignment,
        responses::{StudentAverageRow, SubmissionWithStudent},
    },
    batches::entities::Batch,
};
use crate::utils::pdf::PdfReport;

/// 批次作业报表（xlsx / pdf）：作业清单 + 每个学生的已评分平均分。
/// 批次没有任何作业时返回 404。
pub async fn export_batch_assignments(
    service: &AssignmentService,
    batch_id: i64,
    params: ExportParams,
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
                "Failed to export batch assignments",
            )));
        }
    };

    let assignments = match storage.list_assignments_by_batch(batch_id).await {
        Ok(assignments) => assignments,
        Err(e) => {
            error!("Failed to list assignments of batch {}: {}", batch_id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to export batch assignments",
            )));
        }
    };

    if assignments.is_empty() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoAssignmentsForBatch,
            format!("Batch {batch_id} has no assignments"),
        )));
    }

    let mut all_submissions: Vec<SubmissionWithStudent> = Vec::new();
    for assignment in &assignments {
        match storage.list_submissions_with_students(assignment.id).await {
            Ok(mut submissions) => all_submissions.append(&mut submissions),
            Err(e) => {
                error!(
                    "Failed to list submissions of assignment {}: {}",
                    assignment.id, e
                );
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    "Failed to export batch assignments",
                )));
            }
        }
    }

    let averages = student_averages(&all_submissions);

    match params.format.as_str() {
        "pdf" => export_pdf(&batch, &assignments, &averages),
        "xlsx" => export_xlsx(&batch, &assignments, &averages),
        other => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Unsupported export format: {other}"),
        ))),
    }
}

/// 每个学生已评分提交的平均分（按学号排序）
pub fn student_averages(submissions: &[SubmissionWithStudent]) -> Vec<StudentAverageRow> {
    struct Acc {
        roll_number: String,
        student_name: String,
        sum: f64,
        count: i64,
    }

    let mut by_student: HashMap<i64, Acc> = HashMap::new();
    for row in submissions {
        let Some(marks) = row.submission.marks else {
            continue;
        };
        let acc = by_student
            .entry(row.submission.student_id)
            .or_insert_with(|| Acc {
                roll_number: row.roll_number.clone(),
                student_name: row.student_name.clone(),
                sum: 0.0,
                count: 0,
            });
        acc.sum += marks;
        acc.count += 1;
    }

    let mut rows: Vec<StudentAverageRow> = by_student
        .into_iter()
        .map(|(student_id, acc)| StudentAverageRow {
            student_id,
            roll_number: acc.roll_number,
            student_name: acc.student_name,
            graded_count: acc.count,
            average_marks: ((acc.sum / acc.count as f64) * 100.0).round() / 100.0,
        })
        .collect();
    rows.sort_by(|a, b| a.roll_number.cmp(&b.roll_number));
    rows
}

fn export_xlsx(
    batch: &Batch,
    assignments: &[Assignment],
    averages: &[StudentAverageRow],
) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    let _ = sheet.set_name("Assignments");
    let headers = ["Title", "Due Date", "Max Marks"];
    for (col, header) in headers.iter().enumerate() {
        let _ = sheet.write(0, col as u16, *header);
    }
    for (index, assignment) in assignments.iter().enumerate() {
        let r = (index + 1) as u32;
        let _ = sheet.write(r, 0, &assignment.title);
        let _ = sheet.write(r, 1, assignment.due_date.to_string());
        let _ = sheet.write(r, 2, assignment.max_marks);
    }

    let sheet = workbook.add_worksheet();
    let _ = sheet.set_name("Student Averages");
    let headers = ["Roll Number", "Student", "Graded", "Average Marks"];
    for (col, header) in headers.iter().enumerate() {
        let _ = sheet.write(0, col as u16, *header);
    }
    for (index, row) in averages.iter().enumerate() {
        let r = (index + 1) as u32;
        let _ = sheet.write(r, 0, &row.roll_number);
        let _ = sheet.write(r, 1, &row.student_name);
        let _ = sheet.write(r, 2, row.graded_count as f64);
        let _ = sheet.write(r, 3, row.average_marks);
    }

    match workbook.save_to_buffer() {
        Ok(buffer) => Ok(HttpResponse::Ok()
            .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"assignments_{}.xlsx\"",
                    batch.batch_code
                ),
            ))
            .body(buffer)),
        Err(e) => {
            error!("Failed to render batch assignments workbook: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render workbook",
            )))
        }
    }
}

fn export_pdf(
    batch: &Batch,
    assignments: &[Assignment],
    averages: &[StudentAverageRow],
) -> ActixResult<HttpResponse> {
    let render = || -> crate::errors::Result<Vec<u8>> {
        let mut report = PdfReport::new(&format!("Assignments Report: {}", batch.name))?;
        report.key_value("Batch Code", &batch.batch_code);
        report.key_value("Assignments", &assignments.len().to_string());

        report.heading("Assignments");
        let rows: Vec<Vec<String>> = assignments
            .iter()
            .map(|a| {
                vec![
                    a.title.clone(),
                    a.due_date.to_string(),
                    format!("{:.1}", a.max_marks),
                ]
            })
            .collect();
        report.table(&["Title", "Due", "Max Marks"], &rows);

        report.heading("Student Averages");
        let rows: Vec<Vec<String>> = averages
            .iter()
            .map(|r| {
                vec![
                    r.roll_number.clone(),
                    r.student_name.clone(),
                    r.graded_count.to_string(),
                    format!("{:.2}", r.average_marks),
                ]
            })
            .collect();
        report.table(&["Roll", "Student", "Graded", "Average"], &rows);

        report.finish()
    };

    match render() {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!(
                    "attachment; filename=\"assignments_{}.pdf\"",
                    batch.batch_code
                ),
            ))
            .body(bytes)),
        Err(e) => {
            error!("Failed to render batch assignments PDF: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExportFailed,
                "Failed to render PDF",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::{AssignmentSubmission, SubmissionStatus};

    fn submission(student_id: i64, roll: &str, marks: Option<f64>) -> SubmissionWithStudent {
        SubmissionWithStudent {
            submission: AssignmentSubmission {
                id: student_id * 10,
                assignment_id: 1,
                student_id,
                submitted_at: Some(chrono::Utc::now()),
                file_url: None,
                status: if marks.is_some() {
                    SubmissionStatus::Graded
                } else {
                    SubmissionStatus::Submitted
                },
                marks,
                remarks: None,
            },
            roll_number: roll.to_string(),
            student_name: format!("Student {student_id}"),
        }
    }

    #[test]
    fn test_student_averages_ignores_ungraded() {
        let rows = student_averages(&[
            submission(1, "R001", Some(80.0)),
            submission(1, "R001", Some(90.0)),
            submission(2, "R002", None),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_id, 1);
        assert_eq!(rows[0].graded_count, 2);
        assert_eq!(rows[0].average_marks, 85.0);
    }

    #[test]
    fn test_student_averages_sorted_by_roll() {
        let rows = student_averages(&[
            submission(3, "R003", Some(70.0)),
            submission(1, "R001", Some(60.0)),
        ]);
        assert_eq!(rows[0].roll_number, "R001");
        assert_eq!(rows[1].roll_number, "R003");
    }
}
