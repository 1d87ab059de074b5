//! 考勤记录实体（每课次一条）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub lecture_session_id: i64,
    pub subject_id: i64,
    pub batch_id: i64,
    pub teacher_id: i64,
    pub date: Date,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecture_sessions::Entity",
        from = "Column::LectureSessionId",
        to = "super::lecture_sessions::Column::Id"
    )]
    LectureSession,
    #[sea_orm(has_many = "super::attendance_entries::Entity")]
    Entries,
}

impl Related<super::lecture_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LectureSession.def()
    }
}

impl Related<super::attendance_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attendance_record(self) -> crate::models::attendance::entities::AttendanceRecord {
        use chrono::{DateTime, Utc};

        crate::models::attendance::entities::AttendanceRecord {
            id: self.id,
            lecture_session_id: self.lecture_session_id,
            subject_id: self.subject_id,
            batch_id: self.batch_id,
            teacher_id: self.teacher_id,
            date: self.date,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
