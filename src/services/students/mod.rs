pub mod create;
pub mod delete;
pub mod get;
pub mod import;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, ImportStudentsRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 创建学生
    pub async fn create_student(
        &self,
        create_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, create_data, request).await
    }

    // 学生列表
    pub async fn list_students(
        &self,
        params: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, params, request).await
    }

    // 学生详情（含批次信息）
    pub async fn get_student(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_student(self, id, request).await
    }

    // 更新学生
    pub async fn update_student(
        &self,
        id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, id, update_data, request).await
    }

    // 删除学生
    pub async fn delete_student(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, id, request).await
    }

    // 批量导入（部分成功）
    pub async fn import_students(
        &self,
        import_data: ImportStudentsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_students(self, import_data, request).await
    }
}
