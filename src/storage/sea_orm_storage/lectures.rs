//! 课次存储操作

use super::SeaOrmStorage;
use crate::entity::lecture_sessions::{ActiveModel, Column, Entity as LectureSessions};
use crate::errors::{EduSysError, Result};
use crate::models::lectures::{
    entities::{LectureSession, LectureStatus},
    requests::{CreateLectureRequest, UpdateLectureRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课次，初始状态 scheduled，未登记考勤
    pub async fn create_lecture_impl(
        &self,
        teacher_id: i64,
        req: CreateLectureRequest,
    ) -> Result<LectureSession> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            session_code: Set(req.session_code),
            subject_id: Set(req.subject_id),
            batch_id: Set(req.batch_id),
            teacher_id: Set(teacher_id),
            date: Set(req.date),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            topic: Set(req.topic),
            status: Set(LectureStatus::Scheduled.to_string()),
            attendance_taken: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建课次失败: {e}")))?;

        Ok(result.into_lecture_session())
    }

    /// 通过 ID 获取课次
    pub async fn get_lecture_by_id_impl(&self, id: i64) -> Result<Option<LectureSession>> {
        let result = LectureSessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询课次失败: {e}")))?;

        Ok(result.map(|m| m.into_lecture_session()))
    }

    /// 通过课次编号获取课次
    pub async fn get_lecture_by_code_impl(
        &self,
        session_code: &str,
    ) -> Result<Option<LectureSession>> {
        let result = LectureSessions::find()
            .filter(Column::SessionCode.eq(session_code))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询课次失败: {e}")))?;

        Ok(result.map(|m| m.into_lecture_session()))
    }

    /// 列出教师课次，最新日期在前
    pub async fn list_lectures_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<LectureSession>> {
        let sessions = LectureSessions::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师课次失败: {e}")))?;

        Ok(sessions
            .into_iter()
            .map(|m| m.into_lecture_session())
            .collect())
    }

    /// 更新课次状态（改期可携带新日期/时间）
    pub async fn update_lecture_impl(
        &self,
        update: UpdateLectureRequest,
    ) -> Result<Option<LectureSession>> {
        let existing = self.get_lecture_by_id_impl(update.lecture_session_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(update.lecture_session_id),
            status: Set(update.status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(date) = update.date {
            model.date = Set(date);
        }

        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }

        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("更新课次失败: {e}")))?;

        Ok(Some(result.into_lecture_session()))
    }
}
