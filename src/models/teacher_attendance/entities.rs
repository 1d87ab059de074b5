use serde::{Deserialize, Serialize};

// 教师考勤状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TeacherAttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
    OnLeave, // 请假
}

impl<'de> Deserialize<'de> for TeacherAttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的教师考勤状态: '{s}'. 支持的状态: present, absent, on_leave"
            ))
        })
    }
}

impl std::fmt::Display for TeacherAttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeacherAttendanceStatus::Present => write!(f, "present"),
            TeacherAttendanceStatus::Absent => write!(f, "absent"),
            TeacherAttendanceStatus::OnLeave => write!(f, "on_leave"),
        }
    }
}

impl std::str::FromStr for TeacherAttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(TeacherAttendanceStatus::Present),
            "absent" => Ok(TeacherAttendanceStatus::Absent),
            "on_leave" => Ok(TeacherAttendanceStatus::OnLeave),
            _ => Err(format!("Invalid teacher attendance status: {s}")),
        }
    }
}

// 教师考勤记录，(teacher, date) 唯一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherAttendanceRecord {
    pub id: i64,
    pub teacher_id: i64,
    pub date: chrono::NaiveDate,
    pub status: TeacherAttendanceStatus,
    pub remarks: Option<String>,
    pub marked_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
