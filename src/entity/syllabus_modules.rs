//! 大纲模块实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "syllabus_modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub syllabus_id: i64,
    pub position: i32,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::syllabi::Entity",
        from = "Column::SyllabusId",
        to = "super::syllabi::Column::Id"
    )]
    Syllabus,
    #[sea_orm(has_many = "super::syllabus_topics::Entity")]
    Topics,
}

impl Related<super::syllabi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Syllabus.def()
    }
}

impl Related<super::syllabus_topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
