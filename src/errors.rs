//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_edusys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduSysError {
            $($variant(String),)*
        }

        impl EduSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edusys_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Resource Conflict"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    ReportRender("E012", "Report Render Error"),
}

impl EduSysError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EduSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduSysError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduSysError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EduSysError {
    fn from(err: std::io::Error) -> Self {
        EduSysError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EduSysError {
    fn from(err: serde_json::Error) -> Self {
        EduSysError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduSysError {
    fn from(err: chrono::ParseError) -> Self {
        EduSysError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduSysError::cache_connection("test").code(), "E001");
        assert_eq!(EduSysError::validation("test").code(), "E005");
        assert_eq!(EduSysError::conflict("test").code(), "E007");
        assert_eq!(EduSysError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduSysError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            EduSysError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduSysError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = EduSysError::conflict("Duplicate roll number");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Conflict"));
        assert!(formatted.contains("Duplicate roll number"));
    }
}
