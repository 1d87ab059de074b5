//! 批次存储操作

use super::SeaOrmStorage;
use crate::entity::batches::{ActiveModel, Column, Entity as Batches};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{EduSysError, Result};
use crate::models::{
    PaginationInfo,
    batches::{
        entities::Batch,
        requests::{BatchListQuery, CreateBatchRequest, UpdateBatchRequest},
        responses::{BatchDetailResponse, BatchListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建批次
    pub async fn create_batch_impl(&self, req: CreateBatchRequest) -> Result<Batch> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            batch_code: Set(req.batch_code),
            name: Set(req.name),
            year: Set(req.year),
            department: Set(req.department),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建批次失败: {e}")))?;

        Ok(result.into_batch())
    }

    /// 通过 ID 获取批次
    pub async fn get_batch_by_id_impl(&self, id: i64) -> Result<Option<Batch>> {
        let result = Batches::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次失败: {e}")))?;

        Ok(result.map(|m| m.into_batch()))
    }

    /// 通过批次编号获取批次
    pub async fn get_batch_by_code_impl(&self, batch_code: &str) -> Result<Option<Batch>> {
        let result = Batches::find()
            .filter(Column::BatchCode.eq(batch_code))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次失败: {e}")))?;

        Ok(result.map(|m| m.into_batch()))
    }

    /// 获取批次详情：成员学生、科目及任课教师
    pub async fn get_batch_detail_impl(&self, id: i64) -> Result<Option<BatchDetailResponse>> {
        let Some(batch) = self.get_batch_by_id_impl(id).await? else {
            return Ok(None);
        };

        let students = self.list_students_by_batch_impl(id).await?;

        let subject_models = Subjects::find()
            .filter(SubjectColumn::BatchId.eq(id))
            .order_by_asc(SubjectColumn::Code)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次科目失败: {e}")))?;

        // 任课教师去重
        let mut teacher_ids: Vec<i64> = subject_models.iter().filter_map(|s| s.teacher_id).collect();
        teacher_ids.sort_unstable();
        teacher_ids.dedup();

        let teachers = if teacher_ids.is_empty() {
            vec![]
        } else {
            Teachers::find()
                .filter(crate::entity::teachers::Column::Id.is_in(teacher_ids))
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询任课教师失败: {e}")))?
                .into_iter()
                .map(|m| m.into_teacher())
                .collect()
        };

        Ok(Some(BatchDetailResponse {
            batch,
            students,
            subjects: subject_models.into_iter().map(|m| m.into_subject()).collect(),
            teachers,
        }))
    }

    /// 分页列出批次
    pub async fn list_batches_with_pagination_impl(
        &self,
        query: BatchListQuery,
    ) -> Result<BatchListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Batches::find();

        // 部门筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 年份筛选
        if let Some(year) = query.year {
            select = select.filter(Column::Year.eq(year));
        }

        // 排序
        select = select.order_by_desc(Column::Year).order_by_asc(Column::BatchCode);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次页数失败: {e}")))?;

        let batches = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次列表失败: {e}")))?;

        Ok(BatchListResponse {
            items: batches.into_iter().map(|m| m.into_batch()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新批次信息
    pub async fn update_batch_impl(
        &self,
        id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        // 先检查批次是否存在
        let existing = self.get_batch_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(batch_code) = update.batch_code {
            model.batch_code = Set(batch_code);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(year) = update.year {
            model.year = Set(year);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("更新批次失败: {e}")))?;

        self.get_batch_by_id_impl(id).await
    }

    /// 删除批次
    pub async fn delete_batch_impl(&self, id: i64) -> Result<bool> {
        let result = Batches::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("删除批次失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
