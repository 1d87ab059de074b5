pub mod analytics;
pub mod batch_summary;
pub mod export;
pub mod export_pdf;
pub mod get;
pub mod mark;
pub mod student_summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    BatchAttendanceExportParams, BatchAttendanceParams, MarkAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 登记课次考勤（一次性，重复登记返回 409）
    pub async fn mark_attendance(
        &self,
        mark_data: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, mark_data, request).await
    }

    // 单课次考勤详情
    pub async fn get_session_attendance(
        &self,
        lecture_session_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_session_attendance(self, lecture_session_id, request).await
    }

    // 学生考勤汇总
    pub async fn student_summary(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_summary::student_summary(self, student_id, request).await
    }

    // 批次考勤汇总（可按科目过滤）
    pub async fn batch_summary(
        &self,
        batch_id: i64,
        params: BatchAttendanceParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        batch_summary::batch_summary(self, batch_id, params, request).await
    }

    // 批次考勤分析（平均、前后五名、分布）
    pub async fn batch_analytics(
        &self,
        batch_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        analytics::batch_analytics(self, batch_id, request).await
    }

    // 批次考勤导出（xlsx / csv）
    pub async fn export_batch_attendance(
        &self,
        batch_id: i64,
        params: BatchAttendanceExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_batch_attendance(self, batch_id, params, request).await
    }

    // 批次考勤分析 PDF（含分布柱状图）
    pub async fn export_batch_attendance_pdf(
        &self,
        batch_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export_pdf::export_batch_attendance_pdf(self, batch_id, request).await
    }
}
