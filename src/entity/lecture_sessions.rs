//! 课次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lecture_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub session_code: String,
    pub subject_id: i64,
    pub batch_id: i64,
    pub teacher_id: i64,
    pub date: Date,
    pub start_time: String,
    pub end_time: String,
    pub topic: Option<String>,
    pub diary_note: Option<String>,
    pub status: String,
    pub attendance_taken: bool,
    pub attendance_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_one = "super::attendance_records::Entity")]
    AttendanceRecord,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lecture_session(self) -> crate::models::lectures::entities::LectureSession {
        use crate::models::lectures::entities::{LectureSession, LectureStatus};
        use chrono::{DateTime, Utc};

        LectureSession {
            id: self.id,
            session_code: self.session_code,
            subject_id: self.subject_id,
            batch_id: self.batch_id,
            teacher_id: self.teacher_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            topic: self.topic,
            diary_note: self.diary_note,
            status: self
                .status
                .parse::<LectureStatus>()
                .unwrap_or(LectureStatus::Scheduled),
            attendance_taken: self.attendance_taken,
            attendance_id: self.attendance_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
