use serde::Deserialize;

// 教学日志创建请求。引用的大纲知识点会在同一事务内标记完成。
#[derive(Debug, Deserialize)]
pub struct CreateDiaryEntryRequest {
    pub batch_id: i64,
    pub subject_id: i64,
    pub lecture_date: chrono::NaiveDate,
    pub notes: Option<String>,
    pub proofs: Option<String>,
    #[serde(default)]
    pub topics_covered: Vec<i64>,
}

// 教学日志筛选参数
#[derive(Debug, Deserialize)]
pub struct DiaryListParams {
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub batch_id: Option<i64>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}
