use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::responses::{
        AttendanceDistribution, BatchAttendanceAnalytics, BatchAttendanceRow,
    },
};

pub async fn batch_analytics(
    service: &AttendanceService,
    batch_id: i64,
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
                "Failed to compute attendance analytics",
            )));
        }
    }

    match storage.batch_attendance_rows(batch_id, None).await {
        Ok(rows) => {
            let analytics = compute_analytics(batch_id, rows);
            Ok(HttpResponse::Ok().json(ApiResponse::success(analytics, "获取考勤分析成功")))
        }
        Err(e) => {
            error!("Failed to load attendance for batch {}: {}", batch_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to compute attendance analytics",
            )))
        }
    }
}

/// 按出勤率降序排序（稳定排序，同分保持原有顺序）
fn sort_by_percentage_desc(rows: &mut [BatchAttendanceRow]) {
    rows.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// 分布桶：[90,100] / [75,90) / [50,75) / [0,50)
fn distribution(rows: &[BatchAttendanceRow]) -> AttendanceDistribution {
    let mut dist = AttendanceDistribution {
        above90: 0,
        between75_89: 0,
        between50_74: 0,
        below50: 0,
    };
    for row in rows {
        if row.percentage >= 90.0 {
            dist.above90 += 1;
        } else if row.percentage >= 75.0 {
            dist.between75_89 += 1;
        } else if row.percentage >= 50.0 {
            dist.between50_74 += 1;
        } else {
            dist.below50 += 1;
        }
    }
    dist
}

/// 批次考勤分析。前五/后五取自同一份降序排序结果，
/// 学生不足十人时两组不重叠（后五只取剩余部分）。
pub fn compute_analytics(batch_id: i64, mut rows: Vec<BatchAttendanceRow>) -> BatchAttendanceAnalytics {
    sort_by_percentage_desc(&mut rows);

    let total_students = rows.len() as i64;
    let average_percentage = if rows.is_empty() {
        0.0
    } else {
        let sum: f64 = rows.iter().map(|r| r.percentage).sum();
        ((sum / rows.len() as f64) * 100.0).round() / 100.0
    };

    let dist = distribution(&rows);

    let top_count = rows.len().min(5);
    let top_performers: Vec<BatchAttendanceRow> = rows[..top_count].to_vec();
    let remaining = &rows[top_count..];
    let bottom_count = remaining.len().min(5);
    let bottom_performers: Vec<BatchAttendanceRow> =
        remaining[remaining.len() - bottom_count..].to_vec();

    BatchAttendanceAnalytics {
        batch_id,
        total_students,
        average_percentage,
        top_performers,
        bottom_performers,
        distribution: dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_analytics_empty_batch() {
        let analytics = compute_analytics(1, vec![]);
        assert_eq!(analytics.total_students, 0);
        assert_eq!(analytics.average_percentage, 0.0);
        assert!(analytics.top_performers.is_empty());
        assert!(analytics.bottom_performers.is_empty());
    }

    #[test]
    fn test_analytics_three_students() {
        let analytics = compute_analytics(1, vec![row(2, 50.0), row(1, 100.0), row(3, 0.0)]);
        assert_eq!(analytics.total_students, 3);
        assert_eq!(analytics.average_percentage, 50.0);
        // 前五吸收全部三人，后五为空（不重叠）
        assert_eq!(analytics.top_performers.len(), 3);
        assert_eq!(analytics.top_performers[0].student_id, 1);
        assert!(analytics.bottom_performers.is_empty());
        assert_eq!(analytics.distribution.above90, 1);
        assert_eq!(analytics.distribution.between75_89, 0);
        assert_eq!(analytics.distribution.between50_74, 1);
        assert_eq!(analytics.distribution.below50, 1);
    }

    #[test]
    fn test_analytics_twelve_students_disjoint_groups() {
        let rows: Vec<_> = (1..=12).map(|i| row(i, (i * 8) as f64)).collect();
        let analytics = compute_analytics(1, rows);
        assert_eq!(analytics.top_performers.len(), 5);
        assert_eq!(analytics.bottom_performers.len(), 5);
        let top_ids: Vec<i64> = analytics.top_performers.iter().map(|r| r.student_id).collect();
        let bottom_ids: Vec<i64> = analytics
            .bottom_performers
            .iter()
            .map(|r| r.student_id)
            .collect();
        assert_eq!(top_ids, vec![12, 11, 10, 9, 8]);
        assert_eq!(bottom_ids, vec![5, 4, 3, 2, 1]);
        for id in &top_ids {
            assert!(!bottom_ids.contains(id));
        }
    }

    #[test]
    fn test_distribution_boundaries() {
        let rows = vec![row(1, 90.0), row(2, 89.99), row(3, 75.0), row(4, 74.99), row(5, 50.0), row(6, 49.99)];
        let dist = distribution(&rows);
        assert_eq!(dist.above90, 1);
        assert_eq!(dist.between75_89, 2);
        assert_eq!(dist.between50_74, 2);
        assert_eq!(dist.below50, 1);
        assert_eq!(
            dist.above90 + dist.between75_89 + dist.between50_74 + dist.below50,
            rows.len() as i64
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_percentages() {
        let mut rows = vec![row(1, 80.0), row(2, 80.0), row(3, 90.0)];
        sort_by_percentage_desc(&mut rows);
        assert_eq!(rows[0].student_id, 3);
        assert_eq!(rows[1].student_id, 1);
        assert_eq!(rows[2].student_id, 2);
    }
}
