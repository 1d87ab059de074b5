//! 大纲知识点实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "syllabus_topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub position: i32,
    pub title: String,
    pub is_completed: bool,
    pub completed_at: Option<i64>,
    pub completed_by: Option<i64>,
    pub proofs: Option<String>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::syllabus_modules::Entity",
        from = "Column::ModuleId",
        to = "super::syllabus_modules::Column::Id"
    )]
    Module,
}

impl Related<super::syllabus_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_topic(self) -> crate::models::syllabus::entities::SyllabusTopic {
        use chrono::{DateTime, Utc};

        crate::models::syllabus::entities::SyllabusTopic {
            id: self.id,
            position: self.position,
            title: self.title,
            is_completed: self.is_completed,
            completed_at: self
                .completed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            completed_by: self.completed_by,
            proofs: self.proofs,
            notes: self.notes,
        }
    }
}
