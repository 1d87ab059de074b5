pub mod batch_export;
pub mod create;
pub mod export;
pub mod grade;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ExportParams;
use crate::models::assignments::requests::{
    CreateAssignmentRequest, GradeSubmissionRequest, SubmitAssignmentRequest,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    // 创建作业（归属当前教师）
    pub async fn create_assignment(
        &self,
        create_data: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, create_data, request).await
    }

    // 科目下作业列表
    pub async fn list_by_subject(
        &self,
        subject_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_by_subject(self, subject_id, request).await
    }

    // 学生提交作业（重复提交覆盖）
    pub async fn submit_assignment(
        &self,
        assignment_id: i64,
        submit_data: SubmitAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, assignment_id, submit_data, request).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        grade_data: GradeSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, assignment_id, student_id, grade_data, request).await
    }

    // 单作业提交报表（xlsx / pdf）
    pub async fn export_assignment(
        &self,
        assignment_id: i64,
        params: ExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_assignment(self, assignment_id, params, request).await
    }

    // 批次作业报表（xlsx / pdf，含学生平均分）
    pub async fn export_batch_assignments(
        &self,
        batch_id: i64,
        params: ExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        batch_export::export_batch_assignments(self, batch_id, params, request).await
    }
}
