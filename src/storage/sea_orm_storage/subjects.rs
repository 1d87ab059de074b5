//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{EduSysError, Result};
use crate::models::subjects::{
    entities::{Subject, SubjectWithTeacher},
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            department: Set(req.department),
            year: Set(req.year),
            semester: Set(req.semester),
            credits: Set(req.credits),
            description: Set(req.description),
            batch_id: Set(req.batch_id),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出批次内科目（附任课教师信息）
    pub async fn list_subjects_by_batch_impl(
        &self,
        batch_id: i64,
    ) -> Result<Vec<SubjectWithTeacher>> {
        let rows = Subjects::find()
            .filter(Column::BatchId.eq(batch_id))
            .order_by_asc(Column::Code)
            .find_also_related(Teachers)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次科目失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(subject, teacher)| SubjectWithTeacher {
                subject: subject.into_subject(),
                teacher_name: teacher.as_ref().map(|t| t.name.clone()),
                teacher_code: teacher.map(|t| t.teacher_code),
            })
            .collect())
    }

    /// 更新科目信息
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        // 先检查科目是否存在
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }

        if let Some(year) = update.year {
            model.year = Set(Some(year));
        }

        if let Some(semester) = update.semester {
            model.semester = Set(Some(semester));
        }

        if let Some(credits) = update.credits {
            model.credits = Set(Some(credits));
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目（不级联删除其他实体）
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
