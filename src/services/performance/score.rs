//! 绩效合成的纯计算部分

/// 样本均值，空集为 0
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// 加权绩效评分：40% 教师出勤率 + 40% 学生平均出勤率 + 20% 作业平均得分率。
/// 三个输入都是 0-100 的百分比，输出保留两位小数。
pub fn compute_performance_score(
    teacher_attendance: f64,
    avg_student_attendance: f64,
    avg_assessment: f64,
) -> f64 {
    let score = 0.4 * teacher_attendance + 0.4 * avg_student_attendance + 0.2 * avg_assessment;
    (score * 100.0).round() / 100.0
}

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[80.0, 100.0, 60.0]), 80.0);
    }

    #[test]
    fn test_score_weights() {
        // 0.4*100 + 0.4*50 + 0.2*0 = 60
        assert_eq!(compute_performance_score(100.0, 50.0, 0.0), 60.0);
    }

    #[test]
    fn test_score_all_full() {
        assert_eq!(compute_performance_score(100.0, 100.0, 100.0), 100.0);
    }

    #[test]
    fn test_score_empty_components() {
        // 缺数据的分量按 0 计入
        assert_eq!(compute_performance_score(90.0, 0.0, 0.0), 36.0);
    }

    #[test]
    fn test_score_rounding() {
        // 0.4*33.33 + 0.4*66.67 + 0.2*50 = 50.0
        assert_eq!(compute_performance_score(33.33, 66.67, 50.0), 50.0);
    }
}
