//! 教学日志覆盖知识点实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "diary_topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub diary_entry_id: i64,
    pub topic_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::diary_entries::Entity",
        from = "Column::DiaryEntryId",
        to = "super::diary_entries::Column::Id"
    )]
    DiaryEntry,
    #[sea_orm(
        belongs_to = "super::syllabus_topics::Entity",
        from = "Column::TopicId",
        to = "super::syllabus_topics::Column::Id"
    )]
    Topic,
}

impl Related<super::diary_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiaryEntry.def()
    }
}

impl Related<super::syllabus_topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
