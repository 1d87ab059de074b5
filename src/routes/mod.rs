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

pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use batches::configure_batch_routes;
pub use diary::configure_diary_routes;
pub use leaves::configure_leave_routes;
pub use lectures::configure_lecture_routes;
pub use performance::configure_performance_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use syllabus::configure_syllabus_routes;
pub use teacher_attendance::configure_teacher_attendance_routes;
pub use teachers::configure_teacher_routes;
