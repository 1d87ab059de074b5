pub mod apply;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::leaves::requests::{ApplyLeaveRequest, LeaveListParams, UpdateLeaveStatusRequest};
use crate::storage::Storage;

pub struct LeaveService {
    storage: Option<Arc<dyn Storage>>,
}

impl LeaveService {
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

    // 提交请假申请
    pub async fn apply_leave(
        &self,
        apply_data: ApplyLeaveRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        apply::apply_leave(self, apply_data, request).await
    }

    // 请假单列表（管理员，可按状态过滤）
    pub async fn list_leaves(
        &self,
        params: LeaveListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_leaves(self, params, request).await
    }

    // 当前教师的请假单
    pub async fn my_leaves(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::my_leaves(self, request).await
    }

    // 审批请假（管理员）。批准时同一事务内补写 On-Leave 教师考勤。
    pub async fn update_leave_status(
        &self,
        id: i64,
        status_data: UpdateLeaveStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_leave_status(self, id, status_data, request).await
    }
}
