pub mod list;
pub mod login;
pub mod me;
pub mod register;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{
    LoginRequest, RegisterTeacherRequest, TeacherListParams, UpdateProfileRequest,
};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 教师注册
    pub async fn register(
        &self,
        register_data: RegisterTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::register(self, register_data, request).await
    }

    // 教师登录
    pub async fn login(
        &self,
        login_data: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::login(self, login_data, request).await
    }

    // 当前教师资料
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        me::me(request).await
    }

    // 更新当前教师资料
    pub async fn update_profile(
        &self,
        update_data: UpdateProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_profile(self, update_data, request).await
    }

    // 教师列表（管理员）
    pub async fn list_teachers(
        &self,
        params: TeacherListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, params, request).await
    }
}
