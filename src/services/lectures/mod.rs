pub mod create;
pub mod my;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lectures::requests::{CreateLectureRequest, UpdateLectureRequest};
use crate::storage::Storage;

pub struct LectureService {
    storage: Option<Arc<dyn Storage>>,
}

impl LectureService {
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

    // 创建课次（归属当前教师）
    pub async fn create_lecture(
        &self,
        create_data: CreateLectureRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_lecture(self, create_data, request).await
    }

    // 当前教师的课次列表
    pub async fn my_lectures(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my::my_lectures(self, request).await
    }

    // 更新课次状态（仅归属教师）
    pub async fn update_lecture(
        &self,
        update_data: UpdateLectureRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_lecture(self, update_data, request).await
    }
}
