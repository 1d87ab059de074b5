pub mod by_date;
pub mod mark;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teacher_attendance::requests::MarkTeacherAttendanceRequest;
use crate::storage::Storage;

pub struct TeacherAttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherAttendanceService {
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

    // 登记教师考勤（管理员），(teacher, date) 唯一
    pub async fn mark_attendance(
        &self,
        mark_data: MarkTeacherAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark_attendance(self, mark_data, request).await
    }

    // 某日全部教师考勤
    pub async fn list_by_date(
        &self,
        date: chrono::NaiveDate,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        by_date::list_by_date(self, date, request).await
    }

    // 教师考勤汇总
    pub async fn summary(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::summary(self, teacher_id, request).await
    }
}
