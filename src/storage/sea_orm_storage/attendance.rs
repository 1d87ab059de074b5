//! 学生考勤存储操作
//!
//! 考勤记录创建后不可变。登记时在同一事务内对课次的
//! attendance_taken 做条件更新，保证并发下每课次至多一条考勤。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendance_entries::{
    ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as AttendanceEntries,
};
use crate::entity::attendance_records::{
    ActiveModel as RecordActiveModel, Column as RecordColumn, Entity as AttendanceRecords,
};
use crate::entity::lecture_sessions::{Column as LectureColumn, Entity as LectureSessions};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::subjects::Entity as Subjects;
use crate::errors::{EduSysError, Result};
use crate::models::attendance::{
    requests::MarkAttendanceRequest,
    responses::{
        BatchAttendanceRow, SessionAttendanceResponse, StudentAttendanceSummary, StudentSessionRow,
    },
};
use crate::models::lectures::entities::LectureStatus;
use crate::models::students::entities::Student;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::Expr,
};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl SeaOrmStorage {
    /// 登记课次考勤。重复登记（含并发）返回 Conflict。
    pub async fn mark_attendance_impl(
        &self,
        teacher_id: i64,
        req: MarkAttendanceRequest,
    ) -> Result<SessionAttendanceResponse> {
        let session = self
            .get_lecture_by_id_impl(req.lecture_session_id)
            .await?
            .ok_or_else(|| {
                EduSysError::not_found(format!("课次不存在: {}", req.lecture_session_id))
            })?;

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EduSysError::database_operation(format!("开启事务失败: {e}")))?;

        // 条件更新：仅当尚未登记时才占住该课次
        let claimed = LectureSessions::update_many()
            .col_expr(LectureColumn::AttendanceTaken, Expr::value(true))
            .col_expr(
                LectureColumn::Status,
                Expr::value(LectureStatus::Completed.to_string()),
            )
            .col_expr(LectureColumn::UpdatedAt, Expr::value(now))
            .filter(LectureColumn::Id.eq(req.lecture_session_id))
            .filter(LectureColumn::AttendanceTaken.eq(false))
            .exec(&txn)
            .await
            .map_err(|e| EduSysError::database_operation(format!("占用课次失败: {e}")))?;

        if claimed.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| EduSysError::database_operation(format!("回滚事务失败: {e}")))?;
            return Err(EduSysError::conflict(format!(
                "课次 {} 已登记过考勤",
                req.lecture_session_id
            )));
        }

        let record = RecordActiveModel {
            lecture_session_id: Set(req.lecture_session_id),
            subject_id: Set(session.subject_id),
            batch_id: Set(session.batch_id),
            teacher_id: Set(teacher_id),
            date: Set(session.date),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| EduSysError::database_operation(format!("创建考勤记录失败: {e}")))?;

        let entries: Vec<EntryActiveModel> = req
            .present_student_ids
            .iter()
            .map(|&student_id| (student_id, true))
            .chain(
                req.absent_student_ids
                    .iter()
                    .map(|&student_id| (student_id, false)),
            )
            .map(|(student_id, present)| EntryActiveModel {
                attendance_id: Set(record.id),
                student_id: Set(student_id),
                present: Set(present),
                ..Default::default()
            })
            .collect();

        if !entries.is_empty() {
            AttendanceEntries::insert_many(entries)
                .exec(&txn)
                .await
                .map_err(|e| EduSysError::database_operation(format!("写入考勤明细失败: {e}")))?;
        }

        // 回链考勤记录
        LectureSessions::update_many()
            .col_expr(LectureColumn::AttendanceId, Expr::value(record.id))
            .filter(LectureColumn::Id.eq(req.lecture_session_id))
            .exec(&txn)
            .await
            .map_err(|e| EduSysError::database_operation(format!("关联考勤记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EduSysError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_session_attendance_impl(req.lecture_session_id)
            .await?
            .ok_or_else(|| EduSysError::database_operation("读取刚登记的考勤失败"))
    }

    /// 获取单课次考勤详情。未登记时返回 None。
    pub async fn get_session_attendance_impl(
        &self,
        lecture_session_id: i64,
    ) -> Result<Option<SessionAttendanceResponse>> {
        let Some(session) = self.get_lecture_by_id_impl(lecture_session_id).await? else {
            return Ok(None);
        };

        let Some(record_model) = AttendanceRecords::find()
            .filter(RecordColumn::LectureSessionId.eq(lecture_session_id))
            .one(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询考勤记录失败: {e}")))?
        else {
            return Ok(None);
        };

        let entries = AttendanceEntries::find()
            .filter(EntryColumn::AttendanceId.eq(record_model.id))
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询考勤明细失败: {e}")))?;

        let student_ids: Vec<i64> = entries.iter().map(|e| e.student_id).collect();
        let students: HashMap<i64, Student> = if student_ids.is_empty() {
            HashMap::new()
        } else {
            Students::find()
                .filter(StudentColumn::Id.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询学生失败: {e}")))?
                .into_iter()
                .map(|m| (m.id, m.into_student()))
                .collect()
        };

        let mut present = Vec::new();
        let mut absent = Vec::new();
        for entry in &entries {
            if let Some(student) = students.get(&entry.student_id) {
                if entry.present {
                    present.push(student.clone());
                } else {
                    absent.push(student.clone());
                }
            }
        }
        present.sort_by(|a, b| a.roll_number.cmp(&b.roll_number));
        absent.sort_by(|a, b| a.roll_number.cmp(&b.roll_number));

        Ok(Some(SessionAttendanceResponse {
            session,
            record: record_model.into_attendance_record(),
            present,
            absent,
        }))
    }

    /// 学生考勤汇总，从原始考勤行按需重算
    pub async fn student_attendance_summary_impl(
        &self,
        student_id: i64,
    ) -> Result<StudentAttendanceSummary> {
        let entries = AttendanceEntries::find()
            .filter(EntryColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询考勤明细失败: {e}")))?;

        let record_ids: Vec<i64> = entries.iter().map(|e| e.attendance_id).collect();
        let records = if record_ids.is_empty() {
            vec![]
        } else {
            AttendanceRecords::find()
                .filter(RecordColumn::Id.is_in(record_ids))
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询考勤记录失败: {e}")))?
        };

        let session_ids: Vec<i64> = records.iter().map(|r| r.lecture_session_id).collect();
        let sessions: HashMap<i64, crate::entity::lecture_sessions::Model> =
            if session_ids.is_empty() {
                HashMap::new()
            } else {
                LectureSessions::find()
                    .filter(LectureColumn::Id.is_in(session_ids))
                    .all(&self.db)
                    .await
                    .map_err(|e| EduSysError::database_operation(format!("查询课次失败: {e}")))?
                    .into_iter()
                    .map(|m| (m.id, m))
                    .collect()
            };

        let subject_ids: Vec<i64> = records.iter().map(|r| r.subject_id).collect();
        let subject_names: HashMap<i64, String> = if subject_ids.is_empty() {
            HashMap::new()
        } else {
            Subjects::find()
                .filter(crate::entity::subjects::Column::Id.is_in(subject_ids))
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询科目失败: {e}")))?
                .into_iter()
                .map(|m| (m.id, m.name))
                .collect()
        };

        let record_by_id: HashMap<i64, &crate::entity::attendance_records::Model> =
            records.iter().map(|r| (r.id, r)).collect();

        let mut rows = Vec::with_capacity(entries.len());
        let mut attended = 0i64;
        for entry in &entries {
            let Some(record) = record_by_id.get(&entry.attendance_id) else {
                continue;
            };
            if entry.present {
                attended += 1;
            }
            rows.push(StudentSessionRow {
                lecture_session_id: record.lecture_session_id,
                session_code: sessions
                    .get(&record.lecture_session_id)
                    .map(|s| s.session_code.clone())
                    .unwrap_or_default(),
                subject_name: subject_names
                    .get(&record.subject_id)
                    .cloned()
                    .unwrap_or_default(),
                date: record.date,
                present: entry.present,
            });
        }
        rows.sort_by(|a, b| b.date.cmp(&a.date));

        let total = rows.len() as i64;
        let percentage = if total == 0 {
            0.0
        } else {
            round2(attended as f64 / total as f64 * 100.0)
        };

        Ok(StudentAttendanceSummary {
            student_id,
            total,
            attended,
            percentage,
            sessions: rows,
        })
    }

    /// 批次内每个学生的考勤汇总行。无考勤历史的学生得到零值行。
    pub async fn batch_attendance_rows_impl(
        &self,
        batch_id: i64,
        subject_id: Option<i64>,
    ) -> Result<Vec<BatchAttendanceRow>> {
        let students = self.list_students_by_batch_impl(batch_id).await?;

        let mut record_select = AttendanceRecords::find().filter(RecordColumn::BatchId.eq(batch_id));
        if let Some(subject_id) = subject_id {
            record_select = record_select.filter(RecordColumn::SubjectId.eq(subject_id));
        }
        let records = record_select
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let record_ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        let entries = if record_ids.is_empty() {
            vec![]
        } else {
            AttendanceEntries::find()
                .filter(EntryColumn::AttendanceId.is_in(record_ids))
                .all(&self.db)
                .await
                .map_err(|e| EduSysError::database_operation(format!("查询考勤明细失败: {e}")))?
        };

        // student_id -> (total, attended)
        let mut counts: HashMap<i64, (i64, i64)> = HashMap::new();
        for entry in &entries {
            let slot = counts.entry(entry.student_id).or_insert((0, 0));
            slot.0 += 1;
            if entry.present {
                slot.1 += 1;
            }
        }

        Ok(students
            .into_iter()
            .map(|student| {
                let (total, attended) = counts.get(&student.id).copied().unwrap_or((0, 0));
                let percentage = if total == 0 {
                    0.0
                } else {
                    round2(attended as f64 / total as f64 * 100.0)
                };
                BatchAttendanceRow {
                    student_id: student.id,
                    roll_number: student.roll_number,
                    name: student.name,
                    total,
                    attended,
                    percentage,
                }
            })
            .collect())
    }

    /// 教师已登记考勤课次的每课次出勤比（0-100），绩效用
    pub async fn session_present_ratios_for_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<f64>> {
        let records = AttendanceRecords::find()
            .filter(RecordColumn::TeacherId.eq(teacher_id))
            .order_by_asc(RecordColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let record_ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        if record_ids.is_empty() {
            return Ok(vec![]);
        }

        let entries = AttendanceEntries::find()
            .filter(EntryColumn::AttendanceId.is_in(record_ids))
            .all(&self.db)
            .await
            .map_err(|e| EduSysError::database_operation(format!("查询考勤明细失败: {e}")))?;

        let mut counts: HashMap<i64, (i64, i64)> = HashMap::new();
        for entry in &entries {
            let slot = counts.entry(entry.attendance_id).or_insert((0, 0));
            slot.0 += 1;
            if entry.present {
                slot.1 += 1;
            }
        }

        Ok(records
            .iter()
            .filter_map(|record| {
                let (total, present) = counts.get(&record.id).copied().unwrap_or((0, 0));
                if total == 0 {
                    None
                } else {
                    Some(present as f64 / total as f64 * 100.0)
                }
            })
            .collect())
    }
}
