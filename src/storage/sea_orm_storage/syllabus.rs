//! 教学大纲存储操作

use super::SeaOrmStorage;
use crate::entity::syllabi::{ActiveModel, Entity as Syllabi};
use crate::entity::syllabus_modules::{
    ActiveModel as ModuleActiveModel, Column as ModuleColumn, Entity as SyllabusModules,
};
use crate::entity::syllabus_topics::{
    ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as SyllabusTopics,
};
use crate::errors::{EduSysError, Result};
use crate::models::syllabus::{
    entities::{Syllabus, SyllabusModule},
    requests::{CompleteTopicRequest, CreateSyllabusRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建大纲（模块 → 知识点树），单事务
    pub async fn create_syllabus_impl(&self, req: CreateSyllabusRequest) -> Result<Syllabus> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSysError::database_operation(format!("开启事务失败: {e}")))?;

        let syllabus = ActiveModel {
            subject_id: Set(req.subject_id),
            batch_id: Set(req.batch_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EduSysError::database_operation(format!("创建大纲失败: {e}")))?;

        for (module_index, module) in req.modules.into_iter().enumerate() {
            let module_row = ModuleActiveModel {
                syllabus_id: Set(syllabus.id),
                position: Set(module_index as i32),
                title: Set(module.title),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建大纲模块失败: {e}")))?;

            for (topic_index, title) in module.topics.into_iter().enumerate() {
                TopicActiveModel {
                    module_id: Set(module_row.id),
                    position: Set(topic_index as i32),
                    title: Set(title),
                    is_completed: Set(false),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    EduSysError::database_operation(format!("创建大纲知识点失败: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| EduSysError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_syllabus_by_id_impl(syllabus.id)
            .await?
            .ok_or_else(|| EduSysError::database_operation("读取刚创建的大纲失败"))
    }

    /// 获取完整大纲树
    pub async fn get_syllabus_by_id_impl(&self, id: i64) -> Result<Option<Syllabus>> {
        let Some(syllabus) = Syllabi::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询大纲失败: {e}")))?
        else {
            return Ok(None);
        };

        let module_rows = SyllabusModules::find()
            .filter(ModuleColumn::SyllabusId.eq(id))
            .order_by_asc(ModuleColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询大纲模块失败: {e}")))?;

        let module_ids: Vec<i64> = module_rows.iter().map(|m| m.id).collect();
        let topic_rows = if module_ids.is_empty() {
            vec![]
        } else {
            SyllabusTopics::find()
                .filter(TopicColumn::ModuleId.is_in(module_ids))
                .order_by_asc(TopicColumn::Position)
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询大纲知识点失败: {e}")))?
        };

        let modules = module_rows
            .into_iter()
            .map(|module| {
                let topics = topic_rows
                    .iter()
                    .filter(|t| t.module_id == module.id)
                    .cloned()
                    .map(|t| t.into_topic())
                    .collect();
                SyllabusModule {
                    id: module.id,
                    position: module.position,
                    title: module.title,
                    topics,
                }
            })
            .collect();

        use chrono::{DateTime, Utc};
        Ok(Some(Syllabus {
            id: syllabus.id,
            subject_id: syllabus.subject_id,
            batch_id: syllabus.batch_id,
            modules,
            created_at: DateTime::<Utc>::from_timestamp(syllabus.created_at, 0)
                .unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(syllabus.updated_at, 0)
                .unwrap_or_default(),
        }))
    }

    /// 按模块/知识点序号标记完成。序号越界返回 None。
    pub async fn complete_topic_impl(
        &self,
        syllabus_id: i64,
        module_position: i32,
        topic_position: i32,
        completed_by: i64,
        req: CompleteTopicRequest,
    ) -> Result<Option<Syllabus>> {
        let Some(module) = SyllabusModules::find()
            .filter(ModuleColumn::SyllabusId.eq(syllabus_id))
            .filter(ModuleColumn::Position.eq(module_position))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询大纲模块失败: {e}")))?
        else {
            return Ok(None);
        };

        let Some(topic) = SyllabusTopics::find()
            .filter(TopicColumn::ModuleId.eq(module.id))
            .filter(TopicColumn::Position.eq(topic_position))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询大纲知识点失败: {e}")))?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        TopicActiveModel {
            id: Set(topic.id),
            is_completed: Set(true),
            completed_at: Set(Some(now)),
            completed_by: Set(Some(completed_by)),
            proofs: Set(req.proofs),
            notes: Set(req.notes),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| EduSysError::database_operation(format!("标记知识点完成失败: {e}")))?;

        self.get_syllabus_by_id_impl(syllabus_id).await
    }

    /// 大纲知识点计数 (total, completed)
    pub async fn syllabus_topic_counts_impl(&self, id: i64) -> Result<Option<(i64, i64)>> {
        let exists = Syllabi::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询大纲失败: {e}")))?;
        if exists.is_none() {
            return Ok(None);
        }

        let module_ids: Vec<i64> = SyllabusModules::find()
            .filter(ModuleColumn::SyllabusId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询大纲模块失败: {e}")))?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if module_ids.is_empty() {
            return Ok(Some((0, 0)));
        }

        let total = SyllabusTopics::find()
            .filter(TopicColumn::ModuleId.is_in(module_ids.clone()))
            .count(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("统计知识点失败: {e}")))?;

        let completed = SyllabusTopics::find()
            .filter(TopicColumn::ModuleId.is_in(module_ids))
            .filter(TopicColumn::IsCompleted.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("统计已完成知识点失败: {e}")))?;

        Ok(Some((total as i64, completed as i64)))
    }
}
