use serde::{Deserialize, Serialize};

// 请假状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,  // 待审批
    Approved, // 已批准
    Rejected, // 已驳回
}

impl<'de> Deserialize<'de> for LeaveStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的请假状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))
        })
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            _ => Err(format!("Invalid leave status: {s}")),
        }
    }
}

// 请假单实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leave {
    pub id: i64,
    pub teacher_id: i64,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub approved_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
