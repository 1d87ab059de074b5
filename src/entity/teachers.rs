//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub teacher_code: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub department: String,
    pub role: String,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subjects::Entity")]
    Subjects,
    #[sea_orm(has_many = "super::lecture_sessions::Entity")]
    LectureSessions,
    #[sea_orm(has_many = "super::leaves::Entity")]
    Leaves,
    #[sea_orm(has_many = "super::teacher_attendance::Entity")]
    TeacherAttendance,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subjects.def()
    }
}

impl Related<super::lecture_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LectureSessions.def()
    }
}

impl Related<super::leaves::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leaves.def()
    }
}

impl Related<super::teacher_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherAttendance.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::teachers::entities::{Teacher, TeacherRole};
        use chrono::{DateTime, Utc};

        Teacher {
            id: self.id,
            teacher_code: self.teacher_code,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            phone: self.phone,
            department: self.department,
            role: self
                .role
                .parse::<TeacherRole>()
                .unwrap_or(TeacherRole::Teacher),
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
