use serde::{Deserialize, Serialize};

// 教师角色
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TeacherRole {
    Teacher, // 普通教师
    Admin,   // 管理员
}

impl TeacherRole {
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static TeacherRole] {
        &[&Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static TeacherRole] {
        &[&Self::Teacher, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for TeacherRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            TeacherRole::TEACHER => Ok(TeacherRole::Teacher),
            TeacherRole::ADMIN => Ok(TeacherRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的教师角色: '{s}'. 支持的角色: teacher, admin"
            ))),
        }
    }
}

impl std::fmt::Display for TeacherRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeacherRole::Teacher => write!(f, "{}", TeacherRole::TEACHER),
            TeacherRole::Admin => write!(f, "{}", TeacherRole::ADMIN),
        }
    }
}

impl std::str::FromStr for TeacherRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(TeacherRole::Teacher),
            "admin" => Ok(TeacherRole::Admin),
            _ => Err(format!("Invalid teacher role: {s}")),
        }
    }
}

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub teacher_code: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub phone: Option<String>,
    pub department: String,
    pub role: TeacherRole,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    // 生成访问令牌（使用真正的 JWT）
    pub fn generate_access_token(&self) -> Result<String, String> {
        crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string())
            .map_err(|e| format!("生成 access token 失败: {e}"))
    }
}
