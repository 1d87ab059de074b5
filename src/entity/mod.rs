//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assignment_submissions;
pub mod assignments;
pub mod attendance_entries;
pub mod attendance_records;
pub mod batches;
pub mod diary_entries;
pub mod diary_topics;
pub mod leaves;
pub mod lecture_sessions;
pub mod students;
pub mod subjects;
pub mod syllabi;
pub mod syllabus_modules;
pub mod syllabus_topics;
pub mod teacher_attendance;
pub mod teachers;
