use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{EduSysError, Result};
use crate::models::{
    PaginationInfo,
    teachers::{
        entities::{Teacher, TeacherRole},
        requests::{RegisterTeacherRequest, TeacherListQuery, UpdateProfileRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建教师（req.password 为已哈希的密码）
    pub async fn create_teacher_impl(&self, req: RegisterTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_code: Set(req.teacher_code),
            name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(req.password),
            phone: Set(req.phone),
            department: Set(req.department),
            role: Set(req.role.unwrap_or(TeacherRole::Teacher).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过邮箱获取教师
    pub async fn get_teacher_by_email_impl(&self, email: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过工号获取教师
    pub async fn get_teacher_by_code_impl(&self, teacher_code: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::TeacherCode.eq(teacher_code))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Teachers::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::TeacherCode.contains(&escaped)),
            );
        }

        // 部门筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师资料（update.password 为已哈希的密码）
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Teacher>> {
        // 先检查教师是否存在
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 更新教师最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Teachers::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        let count = Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("统计教师数量失败: {e}")))?;

        Ok(count)
    }
}
