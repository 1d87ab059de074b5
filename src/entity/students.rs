//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub roll_number: String,
    #[sea_orm(unique)]
    pub enrollment_number: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub batch_id: i64,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::batches::Entity",
        from = "Column::BatchId",
        to = "super::batches::Column::Id"
    )]
    Batch,
    #[sea_orm(has_many = "super::attendance_entries::Entity")]
    AttendanceEntries,
    #[sea_orm(has_many = "super::assignment_submissions::Entity")]
    Submissions,
}

impl Related<super::batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::attendance_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceEntries.def()
    }
}

impl Related<super::assignment_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use chrono::{DateTime, Utc};

        crate::models::students::entities::Student {
            id: self.id,
            roll_number: self.roll_number,
            enrollment_number: self.enrollment_number,
            name: self.name,
            email: self.email,
            phone: self.phone,
            guardian_name: self.guardian_name,
            guardian_phone: self.guardian_phone,
            batch_id: self.batch_id,
            department: self.department,
            year: self.year,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
