use serde::Deserialize;

// 大纲创建请求：模块 → 知识点树
#[derive(Debug, Deserialize)]
pub struct CreateSyllabusRequest {
    pub subject_id: i64,
    pub batch_id: i64,
    pub modules: Vec<CreateSyllabusModule>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSyllabusModule {
    pub title: String,
    pub topics: Vec<String>,
}

// 知识点完成请求
#[derive(Debug, Deserialize, Default)]
pub struct CompleteTopicRequest {
    pub proofs: Option<String>,
    pub notes: Option<String>,
}
