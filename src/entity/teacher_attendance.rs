//! 教师考勤实体，(teacher, date) 唯一

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub date: Date,
    pub status: String,
    pub remarks: Option<String>,
    pub marked_by: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher_attendance(
        self,
    ) -> crate::models::teacher_attendance::entities::TeacherAttendanceRecord {
        use crate::models::teacher_attendance::entities::{
            TeacherAttendanceRecord, TeacherAttendanceStatus,
        };
        use chrono::{DateTime, Utc};

        TeacherAttendanceRecord {
            id: self.id,
            teacher_id: self.teacher_id,
            date: self.date,
            status: self
                .status
                .parse::<TeacherAttendanceStatus>()
                .unwrap_or(TeacherAttendanceStatus::Absent),
            remarks: self.remarks,
            marked_by: self.marked_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
