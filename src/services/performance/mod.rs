pub mod export;
pub mod report;
pub mod score;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ExportParams;
use crate::storage::Storage;

pub struct PerformanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl PerformanceService {
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

    // 教师绩效评分
    pub async fn teacher_performance(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::teacher_performance(self, teacher_id, request).await
    }

    // 绩效报表导出（xlsx / pdf）
    pub async fn export_performance(
        &self,
        teacher_id: i64,
        params: ExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_performance(self, teacher_id, params, request).await
    }
}
