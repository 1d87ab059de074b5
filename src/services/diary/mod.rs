pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::diary::requests::{CreateDiaryEntryRequest, DiaryListParams};
use crate::storage::Storage;

pub struct DiaryService {
    storage: Option<Arc<dyn Storage>>,
}

impl DiaryService {
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

    // 创建教学日志。覆盖的大纲知识点同一事务内标记完成。
    pub async fn create_entry(
        &self,
        create_data: CreateDiaryEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_entry(self, create_data, request).await
    }

    // 按条件列出教学日志
    pub async fn list_entries(
        &self,
        params: DiaryListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_entries(self, params, request).await
    }
}
