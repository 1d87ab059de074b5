//! 教师考勤存储操作

use super::SeaOrmStorage;
use crate::entity::teacher_attendance::{ActiveModel, Column, Entity as TeacherAttendance};
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{EduSysError, Result};
use crate::models::teacher_attendance::{
    entities::TeacherAttendanceRecord, requests::MarkTeacherAttendanceRequest,
    responses::TeacherAttendanceWithTeacher,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记教师考勤。(teacher, date) 的唯一索引兜底重复登记。
    pub async fn mark_teacher_attendance_impl(
        &self,
        marked_by: i64,
        req: MarkTeacherAttendanceRequest,
    ) -> Result<TeacherAttendanceRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(req.teacher_id),
            date: Set(req.date),
            status: Set(req.status.to_string()),
            remarks: Set(req.remarks),
            marked_by: Set(Some(marked_by)),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("登记教师考勤失败: {e}")))?;

        Ok(result.into_teacher_attendance())
    }

    /// 某日全部教师考勤（附教师信息）
    pub async fn list_teacher_attendance_by_date_impl(
        &self,
        date: chrono::NaiveDate,
    ) -> Result<Vec<TeacherAttendanceWithTeacher>> {
        let rows = TeacherAttendance::find()
            .filter(Column::Date.eq(date))
            .order_by_asc(Column::TeacherId)
            .find_also_related(Teachers)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师考勤失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(record, teacher)| TeacherAttendanceWithTeacher {
                record: record.into_teacher_attendance(),
                teacher_name: teacher.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
                teacher_code: teacher.map(|t| t.teacher_code).unwrap_or_default(),
            })
            .collect())
    }

    /// 教师的全部考勤记录（按日期倒序）
    pub async fn list_teacher_attendance_records_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherAttendanceRecord>> {
        let rows = TeacherAttendance::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师考勤失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_teacher_attendance())
            .collect())
    }
}
