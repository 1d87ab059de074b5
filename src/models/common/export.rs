use serde::Deserialize;

// 报表导出参数
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "xlsx".to_string()
}
