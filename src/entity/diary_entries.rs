//! 教学日志实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "diary_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    pub batch_id: i64,
    pub subject_id: i64,
    pub lecture_date: Date,
    pub notes: Option<String>,
    pub proofs: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::diary_topics::Entity")]
    Topics,
}

impl Related<super::diary_topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_diary_entry(
        self,
        topics_covered: Vec<i64>,
    ) -> crate::models::diary::entities::DiaryEntry {
        use chrono::{DateTime, Utc};

        crate::models::diary::entities::DiaryEntry {
            id: self.id,
            teacher_id: self.teacher_id,
            batch_id: self.batch_id,
            subject_id: self.subject_id,
            lecture_date: self.lecture_date,
            notes: self.notes,
            proofs: self.proofs,
            topics_covered,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
