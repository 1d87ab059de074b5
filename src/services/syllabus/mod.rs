pub mod complete;
pub mod create;
pub mod progress;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::syllabus::requests::{CompleteTopicRequest, CreateSyllabusRequest};
use crate::storage::Storage;

pub struct SyllabusService {
    storage: Option<Arc<dyn Storage>>,
}

impl SyllabusService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建大纲（模块 → 知识点树）
    pub async fn create_syllabus(
        &self,
        create_data: CreateSyllabusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_syllabus(self, create_data, request).await
    }

    // 按序号标记知识点完成
    pub async fn complete_topic(
        &self,
        syllabus_id: i64,
        module_position: i32,
        topic_position: i32,
        complete_data: CompleteTopicRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        complete::complete_topic(
            self,
            syllabus_id,
            module_position,
            topic_position,
            complete_data,
            request,
        )
        .await
    }

    // 大纲进度
    pub async fn syllabus_progress(
        &self,
        syllabus_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        progress::syllabus_progress(self, syllabus_id, request).await
    }
}
