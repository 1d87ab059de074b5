//! 请假单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leaves")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub start_date: Date,
    pub end_date: Date,
    pub reason: String,
    pub status: String,
    pub approved_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
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
    pub fn into_leave(self) -> crate::models::leaves::entities::Leave {
        use crate::models::leaves::entities::{Leave, LeaveStatus};
        use chrono::{DateTime, Utc};

        Leave {
            id: self.id,
            teacher_id: self.teacher_id,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
            status: self
                .status
                .parse::<LeaveStatus>()
                .unwrap_or(LeaveStatus::Pending),
            approved_by: self.approved_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
