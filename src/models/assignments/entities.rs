use serde::{Deserialize, Serialize};

// 提交状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,   // 未提交
    Submitted, // 已提交
    Graded,    // 已评分
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, submitted, graded"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Submitted => write!(f, "submitted"),
            SubmissionStatus::Graded => write!(f, "graded"),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "submitted" => Ok(SubmissionStatus::Submitted),
            "graded" => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject_id: i64,
    pub batch_id: i64,
    pub teacher_id: i64,
    pub due_date: chrono::NaiveDate,
    pub max_marks: f64,
    pub attachments: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 作业提交实体，(assignment, student) 唯一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentSubmission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub file_url: Option<String>,
    pub status: SubmissionStatus,
    pub marks: Option<f64>,
    pub remarks: Option<String>,
}
