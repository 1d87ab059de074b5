pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod students_export;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ExportParams;
use crate::models::batches::requests::{BatchListParams, CreateBatchRequest, UpdateBatchRequest};
use crate::storage::Storage;

pub struct BatchService {
    storage: Option<Arc<dyn Storage>>,
}

impl BatchService {
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

    // 创建批次
    pub async fn create_batch(
        &self,
        create_data: CreateBatchRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_batch(self, create_data, request).await
    }

    // 批次列表
    pub async fn list_batches(
        &self,
        params: BatchListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_batches(self, params, request).await
    }

    // 批次详情（含学生、科目、任课教师）
    pub async fn get_batch(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_batch(self, id, request).await
    }

    // 更新批次
    pub async fn update_batch(
        &self,
        id: i64,
        update_data: UpdateBatchRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_batch(self, id, update_data, request).await
    }

    // 删除批次
    pub async fn delete_batch(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_batch(self, id, request).await
    }

    // 导出批次详情报表
    pub async fn export_batch(
        &self,
        id: i64,
        params: ExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_batch(self, id, params, request).await
    }

    // 导出批次学生名册（含各科出勤率）
    pub async fn export_batch_students(
        &self,
        id: i64,
        params: ExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students_export::export_batch_students(self, id, params, request).await
    }
}
