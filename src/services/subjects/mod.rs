pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    // 创建科目
    pub async fn create_subject(
        &self,
        create_data: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, create_data, request).await
    }

    // 批次内科目列表
    pub async fn list_subjects_by_batch(
        &self,
        batch_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects_by_batch(self, batch_id, request).await
    }

    // 更新科目
    pub async fn update_subject(
        &self,
        id: i64,
        update_data: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, id, update_data, request).await
    }

    // 删除科目
    pub async fn delete_subject(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, id, request).await
    }
}
