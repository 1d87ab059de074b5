use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{
        requests::{CreateStudentRequest, ImportStudentsRequest},
        responses::{ImportRowIssue, ImportStudentsResponse},
    },
};
use crate::utils::validate::{normalize_phone, validate_email};

/// JSON 批量导入，部分成功语义：
/// 整体永远返回 200，逐行归入 inserted / duplicates / failed。
pub async fn import_students(
    service: &StudentService,
    import_data: ImportStudentsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if import_data.students.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportDataInvalid,
            "No student rows provided",
        )));
    }

    let storage = service.get_storage(request);
    let total = import_data.students.len();
    let mut inserted = 0usize;
    let mut duplicates = Vec::new();
    let mut failed = Vec::new();

    // 批次编号在一次导入内通常高度重复，做个小缓存
    let mut batch_cache: HashMap<String, Option<i64>> = HashMap::new();

    for (index, row) in import_data.students.into_iter().enumerate() {
        if row.roll_number.trim().is_empty()
            || row.enrollment_number.trim().is_empty()
            || row.name.trim().is_empty()
        {
            failed.push(ImportRowIssue {
                index,
                enrollment_number: row.enrollment_number,
                reason: "roll_number, enrollment_number and name are required".to_string(),
            });
            continue;
        }

        if let Some(ref email) = row.email
            && let Err(msg) = validate_email(email)
        {
            failed.push(ImportRowIssue {
                index,
                enrollment_number: row.enrollment_number,
                reason: msg.to_string(),
            });
            continue;
        }

        let batch_id = match batch_cache.get(&row.batch_code) {
            Some(cached) => *cached,
            None => {
                let resolved = match storage.get_batch_by_code(&row.batch_code).await {
                    Ok(batch) => batch.map(|b| b.id),
                    Err(e) => {
                        warn!("Batch lookup failed for {}: {}", row.batch_code, e);
                        None
                    }
                };
                batch_cache.insert(row.batch_code.clone(), resolved);
                resolved
            }
        };

        let Some(batch_id) = batch_id else {
            failed.push(ImportRowIssue {
                index,
                enrollment_number: row.enrollment_number,
                reason: format!("Batch {} not found", row.batch_code),
            });
            continue;
        };

        // 重复行：注册号或批次内学号已存在
        if let Ok(Some(_)) = storage.get_student_by_enrollment(&row.enrollment_number).await {
            duplicates.push(ImportRowIssue {
                index,
                enrollment_number: row.enrollment_number,
                reason: "Enrollment number already exists".to_string(),
            });
            continue;
        }
        if let Ok(Some(_)) = storage
            .get_student_by_roll_in_batch(&row.roll_number, batch_id)
            .await
        {
            duplicates.push(ImportRowIssue {
                index,
                enrollment_number: row.enrollment_number,
                reason: "Roll number already exists in batch".to_string(),
            });
            continue;
        }

        let create_request = CreateStudentRequest {
            roll_number: row.roll_number,
            enrollment_number: row.enrollment_number.clone(),
            name: row.name,
            email: row.email,
            phone: row.phone.as_deref().and_then(normalize_phone),
            guardian_name: row.guardian_name,
            guardian_phone: row.guardian_phone.as_deref().and_then(normalize_phone),
            batch_id,
            department: row.department,
            year: row.year,
        };

        match storage.create_student(create_request).await {
            Ok(_) => inserted += 1,
            Err(e) => {
                let msg = format!("{e}");
                if msg.contains("UNIQUE constraint failed") {
                    duplicates.push(ImportRowIssue {
                        index,
                        enrollment_number: row.enrollment_number,
                        reason: "Student already exists".to_string(),
                    });
                } else {
                    failed.push(ImportRowIssue {
                        index,
                        enrollment_number: row.enrollment_number,
                        reason: msg,
                    });
                }
            }
        }
    }

    info!(
        "Student import finished: total={}, inserted={}, duplicates={}, failed={}",
        total,
        inserted,
        duplicates.len(),
        failed.len()
    );

    let response = ImportStudentsResponse {
        total,
        inserted,
        duplicates,
        failed,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "学生导入完成")))
}
