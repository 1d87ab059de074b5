use serde::{Deserialize, Serialize};

// 课次状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LectureStatus {
    Scheduled,   // 已排课
    Rescheduled, // 已改期
    Cancelled,   // 已取消
    Completed,   // 已完成
}

impl<'de> Deserialize<'de> for LectureStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课次状态: '{s}'. 支持的状态: scheduled, rescheduled, cancelled, completed"
            ))
        })
    }
}

impl std::fmt::Display for LectureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LectureStatus::Scheduled => write!(f, "scheduled"),
            LectureStatus::Rescheduled => write!(f, "rescheduled"),
            LectureStatus::Cancelled => write!(f, "cancelled"),
            LectureStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for LectureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(LectureStatus::Scheduled),
            "rescheduled" => Ok(LectureStatus::Rescheduled),
            "cancelled" => Ok(LectureStatus::Cancelled),
            "completed" => Ok(LectureStatus::Completed),
            _ => Err(format!("Invalid lecture status: {s}")),
        }
    }
}

// 课次实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureSession {
    pub id: i64,
    pub session_code: String,
    pub subject_id: i64,
    pub batch_id: i64,
    pub teacher_id: i64,
    pub date: chrono::NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub topic: Option<String>,
    pub diary_note: Option<String>,
    pub status: LectureStatus,
    pub attendance_taken: bool,
    pub attendance_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
