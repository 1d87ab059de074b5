//! 作业与提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignment_submissions::{
    ActiveModel as SubmissionActiveModel, Column as SubmissionColumn,
    Entity as AssignmentSubmissions,
};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::batches::Entity as Batches;
use crate::entity::students::Entity as Students;
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{EduSysError, Result};
use crate::models::assignments::{
    entities::{Assignment, AssignmentSubmission, SubmissionStatus},
    requests::{CreateAssignmentRequest, GradeSubmissionRequest, SubmitAssignmentRequest},
    responses::{AssignmentWithInfo, SubmissionWithStudent},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            subject_id: Set(req.subject_id),
            batch_id: Set(req.batch_id),
            teacher_id: Set(teacher_id),
            due_date: Set(req.due_date),
            max_marks: Set(req.max_marks),
            attachments: Set(req.attachments),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出科目下的作业（附教师/批次信息）
    pub async fn list_assignments_by_subject_impl(
        &self,
        subject_id: i64,
    ) -> Result<Vec<AssignmentWithInfo>> {
        let assignments = Assignments::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_desc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询科目作业失败: {e}")))?;

        let mut teacher_ids: Vec<i64> = assignments.iter().map(|a| a.teacher_id).collect();
        teacher_ids.sort_unstable();
        teacher_ids.dedup();
        let mut batch_ids: Vec<i64> = assignments.iter().map(|a| a.batch_id).collect();
        batch_ids.sort_unstable();
        batch_ids.dedup();

        let teacher_names: HashMap<i64, String> = if teacher_ids.is_empty() {
            HashMap::new()
        } else {
            Teachers::find()
                .filter(crate::entity::teachers::Column::Id.is_in(teacher_ids))
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询教师失败: {e}")))?
                .into_iter()
                .map(|m| (m.id, m.name))
                .collect()
        };

        let batch_names: HashMap<i64, String> = if batch_ids.is_empty() {
            HashMap::new()
        } else {
            Batches::find()
                .filter(crate::entity::batches::Column::Id.is_in(batch_ids))
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询批次失败: {e}")))?
                .into_iter()
                .map(|m| (m.id, m.name))
                .collect()
        };

        Ok(assignments
            .into_iter()
            .map(|model| {
                let teacher_name = teacher_names.get(&model.teacher_id).cloned();
                let batch_name = batch_names.get(&model.batch_id).cloned();
                AssignmentWithInfo {
                    assignment: model.into_assignment(),
                    teacher_name,
                    batch_name,
                }
            })
            .collect())
    }

    /// 列出批次下的作业
    pub async fn list_assignments_by_batch_impl(&self, batch_id: i64) -> Result<Vec<Assignment>> {
        let assignments = Assignments::find()
            .filter(Column::BatchId.eq(batch_id))
            .order_by_desc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次作业失败: {e}")))?;

        Ok(assignments
            .into_iter()
            .map(|m| m.into_assignment())
            .collect())
    }

    /// 学生提交作业。重复提交覆盖旧行并重置为 Submitted。
    pub async fn submit_assignment_impl(
        &self,
        assignment_id: i64,
        req: SubmitAssignmentRequest,
    ) -> Result<AssignmentSubmission> {
        let now = chrono::Utc::now().timestamp();

        let existing = AssignmentSubmissions::find()
            .filter(
                Condition::all()
                    .add(SubmissionColumn::AssignmentId.eq(assignment_id))
                    .add(SubmissionColumn::StudentId.eq(req.student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询提交失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = SubmissionActiveModel {
                    id: Set(row.id),
                    submitted_at: Set(Some(now)),
                    file_url: Set(req.file_url),
                    status: Set(SubmissionStatus::Submitted.to_string()),
                    marks: Set(None),
                    remarks: Set(None),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| EduSysError::database_operation(format!("覆盖提交失败: {e}")))?
            }
            None => {
                let model = SubmissionActiveModel {
                    assignment_id: Set(assignment_id),
                    student_id: Set(req.student_id),
                    submitted_at: Set(Some(now)),
                    file_url: Set(req.file_url),
                    status: Set(SubmissionStatus::Submitted.to_string()),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| EduSysError::database_operation(format!("创建提交失败: {e}")))?
            }
        };

        Ok(result.into_submission())
    }

    /// 评分。提交不存在时返回 None。
    pub async fn grade_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<AssignmentSubmission>> {
        let Some(existing) = AssignmentSubmissions::find()
            .filter(
                Condition::all()
                    .add(SubmissionColumn::AssignmentId.eq(assignment_id))
                    .add(SubmissionColumn::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询提交失败: {e}")))?
        else {
            return Ok(None);
        };

        let model = SubmissionActiveModel {
            id: Set(existing.id),
            status: Set(SubmissionStatus::Graded.to_string()),
            marks: Set(Some(req.marks)),
            remarks: Set(req.remarks),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("评分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }

    /// 作业的全部提交（附学生信息，按学号排序）
    pub async fn list_submissions_with_students_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionWithStudent>> {
        let rows = AssignmentSubmissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .find_also_related(Students)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询作业提交失败: {e}")))?;

        let mut result: Vec<SubmissionWithStudent> = rows
            .into_iter()
            .map(|(submission, student)| SubmissionWithStudent {
                submission: submission.into_submission(),
                roll_number: student
                    .as_ref()
                    .map(|s| s.roll_number.clone())
                    .unwrap_or_default(),
                student_name: student.map(|s| s.name).unwrap_or_default(),
            })
            .collect();
        result.sort_by(|a, b| a.roll_number.cmp(&b.roll_number));

        Ok(result)
    }

    /// 教师所布置作业中已评分提交的得分率（0-100），绩效用
    pub async fn graded_submission_ratios_for_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<f64>> {
        let assignments = Assignments::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师作业失败: {e}")))?;

        if assignments.is_empty() {
            return Ok(vec![]);
        }

        let max_marks: HashMap<i64, f64> =
            assignments.iter().map(|a| (a.id, a.max_marks)).collect();
        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();

        let graded = AssignmentSubmissions::find()
            .filter(
                Condition::all()
                    .add(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                    .add(SubmissionColumn::Status.eq(SubmissionStatus::Graded.to_string())),
            )
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询已评分提交失败: {e}")))?;

        Ok(graded
            .iter()
            .filter_map(|submission| {
                let marks = submission.marks?;
                let max = max_marks.get(&submission.assignment_id).copied()?;
                if max > 0.0 {
                    Some(marks / max * 100.0)
                } else {
                    None
                }
            })
            .collect())
    }
}
