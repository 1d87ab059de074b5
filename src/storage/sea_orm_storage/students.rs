//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::batches::Entity as Batches;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{EduSysError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentWithBatch},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            roll_number: Set(req.roll_number),
            enrollment_number: Set(req.enrollment_number),
            name: Set(req.name),
            email: Set(req.email),
            phone: Set(req.phone),
            guardian_name: Set(req.guardian_name),
            guardian_phone: Set(req.guardian_phone),
            batch_id: Set(req.batch_id),
            department: Set(req.department),
            year: Set(req.year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 ID 获取学生及批次信息
    pub async fn get_student_with_batch_impl(&self, id: i64) -> Result<Option<StudentWithBatch>> {
        let result = Students::find_by_id(id)
            .find_also_related(Batches)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|(student, batch)| StudentWithBatch {
            student: student.into_student(),
            batch_code: batch.as_ref().map(|b| b.batch_code.clone()),
            batch_name: batch.map(|b| b.name),
        }))
    }

    /// 通过注册号获取学生
    pub async fn get_student_by_enrollment_impl(
        &self,
        enrollment_number: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::EnrollmentNumber.eq(enrollment_number))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过批次内学号获取学生
    pub async fn get_student_by_roll_in_batch_impl(
        &self,
        roll_number: &str,
        batch_id: i64,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(
                Condition::all()
                    .add(Column::RollNumber.eq(roll_number))
                    .add(Column::BatchId.eq(batch_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::RollNumber.contains(&escaped))
                    .add(Column::EnrollmentNumber.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        // 年级筛选
        if let Some(year) = query.year {
            select = select.filter(Column::Year.eq(year));
        }

        // 部门筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 批次筛选
        if let Some(batch_id) = query.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        // 排序
        select = select.order_by_asc(Column::RollNumber);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出批次内全部学生（按学号排序）
    pub async fn list_students_by_batch_impl(&self, batch_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::BatchId.eq(batch_id))
            .order_by_asc(Column::RollNumber)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询批次学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(roll_number) = update.roll_number {
            model.roll_number = Set(roll_number);
        }

        if let Some(enrollment_number) = update.enrollment_number {
            model.enrollment_number = Set(enrollment_number);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(guardian_name) = update.guardian_name {
            model.guardian_name = Set(Some(guardian_name));
        }

        if let Some(guardian_phone) = update.guardian_phone {
            model.guardian_phone = Set(Some(guardian_phone));
        }

        if let Some(batch_id) = update.batch_id {
            model.batch_id = Set(batch_id);
        }

        if let Some(department) = update.department {
            model.department = Set(Some(department));
        }

        if let Some(year) = update.year {
            model.year = Set(Some(year));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
