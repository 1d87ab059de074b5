//! 请假存储操作

use super::SeaOrmStorage;
use crate::entity::leaves::{ActiveModel, Column, Entity as Leaves};
use crate::entity::teacher_attendance::{
    ActiveModel as TeacherAttendanceActiveModel, Column as TeacherAttendanceColumn,
    Entity as TeacherAttendance,
};
use crate::errors::{EduSysError, Result};
use crate::models::leaves::{
    entities::{Leave, LeaveStatus},
    requests::ApplyLeaveRequest,
};
use crate::models::teacher_attendance::entities::TeacherAttendanceStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 提交请假申请，初始状态 pending
    pub async fn apply_leave_impl(&self, teacher_id: i64, req: ApplyLeaveRequest) -> Result<Leave> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            reason: Set(req.reason),
            status: Set(LeaveStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("创建请假单失败: {e}")))?;

        Ok(result.into_leave())
    }

    /// 通过 ID 获取请假单
    pub async fn get_leave_by_id_impl(&self, id: i64) -> Result<Option<Leave>> {
        let result = Leaves::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询请假单失败: {e}")))?;

        Ok(result.map(|m| m.into_leave()))
    }

    /// 列出请假单（可按状态过滤）
    pub async fn list_leaves_impl(&self, status: Option<LeaveStatus>) -> Result<Vec<Leave>> {
        let mut select = Leaves::find();

        if let Some(status) = status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let leaves = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询请假单列表失败: {e}")))?;

        Ok(leaves.into_iter().map(|m| m.into_leave()).collect())
    }

    /// 列出教师的请假单
    pub async fn list_leaves_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Leave>> {
        let leaves = Leaves::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询请假单列表失败: {e}")))?;

        Ok(leaves.into_iter().map(|m| m.into_leave()).collect())
    }

    /// 驳回请假
    pub async fn reject_leave_impl(&self, id: i64, approved_by: i64) -> Result<Option<Leave>> {
        let existing = self.get_leave_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(LeaveStatus::Rejected.to_string()),
            approved_by: Set(Some(approved_by)),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("驳回请假失败: {e}")))?;

        Ok(Some(result.into_leave()))
    }

    /// 批准请假。单个事务内更新状态，并为 [start, end] 的每一天
    /// 补写 On-Leave 教师考勤（该日已有记录则跳过）。任一步失败整体回滚。
    pub async fn apply_leave_approval_impl(
        &self,
        id: i64,
        approved_by: i64,
    ) -> Result<Option<Leave>> {
        let Some(leave) = self.get_leave_by_id_impl(id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSysError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            id: Set(id),
            status: Set(LeaveStatus::Approved.to_string()),
            approved_by: Set(Some(approved_by)),
            updated_at: Set(now),
            ..Default::default()
        };

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| EduSysError::database_operation(format!("批准请假失败: {e}")))?;

        // 已有考勤记录的日期跳过
        let marked_dates: std::collections::HashSet<chrono::NaiveDate> = TeacherAttendance::find()
            .filter(
                Condition::all()
                    .add(TeacherAttendanceColumn::TeacherId.eq(leave.teacher_id))
                    .add(TeacherAttendanceColumn::Date.between(leave.start_date, leave.end_date)),
            )
            .all(&txn)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询教师考勤失败: {e}")))?
            .into_iter()
            .map(|m| m.date)
            .collect();

        for day in leave_days_to_mark(leave.start_date, leave.end_date, &marked_dates) {
            TeacherAttendanceActiveModel {
                teacher_id: Set(leave.teacher_id),
                date: Set(day),
                status: Set(TeacherAttendanceStatus::OnLeave.to_string()),
                remarks: Set(Some(leave.reason.clone())),
                marked_by: Set(Some(approved_by)),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| EduSysError::database_operation(format!("补写请假考勤失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| EduSysError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_leave()))
    }
}

/// 需要补写 On-Leave 考勤的日期：闭区间 [start, end] 去掉已有记录的日期
fn leave_days_to_mark(
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
    marked_dates: &std::collections::HashSet<chrono::NaiveDate>,
) -> Vec<chrono::NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        if !marked_dates.contains(&day) {
            days.push(day);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::leave_days_to_mark;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_full_range_when_nothing_marked() {
        let days = leave_days_to_mark(date(10), date(14), &HashSet::new());
        assert_eq!(days, vec![date(10), date(11), date(12), date(13), date(14)]);
    }

    #[test]
    fn test_already_marked_days_are_skipped() {
        let marked: HashSet<NaiveDate> = [date(11), date(13)].into_iter().collect();
        let days = leave_days_to_mark(date(10), date(14), &marked);
        assert_eq!(days, vec![date(10), date(12), date(14)]);
    }

    #[test]
    fn test_single_day_leave() {
        let days = leave_days_to_mark(date(10), date(10), &HashSet::new());
        assert_eq!(days, vec![date(10)]);
    }

    #[test]
    fn test_inverted_range_yields_no_days() {
        let days = leave_days_to_mark(date(14), date(10), &HashSet::new());
        assert!(days.is_empty());
    }
}
