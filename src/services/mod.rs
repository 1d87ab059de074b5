pub mod assignments;
pub mod attendance;
pub mod batches;
pub mod diary;
pub mod leaves;
pub mod lectures;
pub mod performance;
pub mod students;
pub mod subjects;
pub mod syllabus;
pub mod teacher_attendance;
pub mod teachers;
