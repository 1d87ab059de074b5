use serde::Serialize;

// 教师绩效评分
//
// 加权合成：40% 教师出勤率 + 40% 所授课次的学生平均出勤率 + 20% 作业平均得分率。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeacherPerformanceResponse {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub teacher_attendance_percentage: f64,
    pub avg_student_attendance_percentage: f64,
    pub avg_assessment_percentage: f64,
    pub performance_score: f64,
}
