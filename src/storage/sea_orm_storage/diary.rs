//! 教学日志存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::diary_entries::{ActiveModel, Column, Entity as DiaryEntries};
use crate::entity::diary_topics::{
    ActiveModel as DiaryTopicActiveModel, Column as DiaryTopicColumn, Entity as DiaryTopics,
};
use crate::entity::syllabus_topics::{ActiveModel as TopicActiveModel, Entity as SyllabusTopics};
use crate::errors::{EduSysError, Result};
use crate::models::diary::{
    entities::DiaryEntry,
    requests::{CreateDiaryEntryRequest, DiaryListParams},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教学日志。引用的大纲知识点在同一事务内标记完成。
    pub async fn create_diary_entry_impl(
        &self,
        teacher_id: i64,
        req: CreateDiaryEntryRequest,
    ) -> Result<DiaryEntry> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSysError::database_operation(format!("开启事务失败: {e}")))?;

        let entry = ActiveModel {
            teacher_id: Set(teacher_id),
            batch_id: Set(req.batch_id),
            subject_id: Set(req.subject_id),
            lecture_date: Set(req.lecture_date),
            notes: Set(req.notes),
            proofs: Set(req.proofs),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EduSysError::database_operation(format!("创建教学日志失败: {e}")))?;

        for topic_id in &req.topics_covered {
            // 引用不存在的知识点直接回滚
            let topic = SyllabusTopics::find_by_id(*topic_id)
                .one(&txn)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询知识点失败: {e}")))?
                .ok_or_else(|| {
                    EduSysError::not_found(format!("大纲知识点不存在: {topic_id}"))
                })?;

            DiaryTopicActiveModel {
                diary_entry_id: Set(entry.id),
                topic_id: Set(*topic_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| EduSysError::database_operation(format!("关联知识点失败: {e}")))?;

            if !topic.is_completed {
                TopicActiveModel {
                    id: Set(topic.id),
                    is_completed: Set(true),
                    completed_at: Set(Some(now)),
                    completed_by: Set(Some(teacher_id)),
                    ..Default::default()
                }
                .update(&txn)
                .await
                .map_err(|e| {
                    EduSysError::database_operation(format!("标记知识点完成失败: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| EduSysError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(entry.into_diary_entry(req.topics_covered))
    }

    /// 按条件列出教学日志（日期倒序）
    pub async fn list_diary_entries_impl(
        &self,
        params: DiaryListParams,
    ) -> Result<Vec<DiaryEntry>> {
        let mut select = DiaryEntries::find();

        if let Some(teacher_id) = params.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(subject_id) = params.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(batch_id) = params.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        if let Some(start_date) = params.start_date {
            select = select.filter(Column::LectureDate.gte(start_date));
        }

        if let Some(end_date) = params.end_date {
            select = select.filter(Column::LectureDate.lte(end_date));
        }

        let entries = select
            .order_by_desc(Column::LectureDate)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教学日志失败: {e}")))?;

        let entry_ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        let mut topics_by_entry: HashMap<i64, Vec<i64>> = HashMap::new();
        if !entry_ids.is_empty() {
            let links = DiaryTopics::find()
                .filter(DiaryTopicColumn::DiaryEntryId.is_in(entry_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    EduSysError::database_operation(format!("查询日志知识点关联失败: {e}"))
                })?;
            for link in links {
                topics_by_entry
                    .entry(link.diary_entry_id)
                    .or_default()
                    .push(link.topic_id);
            }
        }

        Ok(entries
            .into_iter()
            .map(|entry| {
                let topics = topics_by_entry.remove(&entry.id).unwrap_or_default();
                entry.into_diary_entry(topics)
            })
            .collect())
    }
}
