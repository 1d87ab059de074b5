//! 预导入模块，方便使用

pub use super::assignment_submissions::{
    ActiveModel as SubmissionActiveModel, Entity as AssignmentSubmissions,
    Model as SubmissionModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::attendance_entries::{
    ActiveModel as AttendanceEntryActiveModel, Entity as AttendanceEntries,
    Model as AttendanceEntryModel,
};
pub use super::attendance_records::{
    ActiveModel as AttendanceRecordActiveModel, Entity as AttendanceRecords,
    Model as AttendanceRecordModel,
};
pub use super::batches::{ActiveModel as BatchActiveModel, Entity as Batches, Model as BatchModel};
pub use super::diary_entries::{
    ActiveModel as DiaryEntryActiveModel, Entity as DiaryEntries, Model as DiaryEntryModel,
};
pub use super::diary_topics::{
    ActiveModel as DiaryTopicActiveModel, Entity as DiaryTopics, Model as DiaryTopicModel,
};
pub use super::leaves::{ActiveModel as LeaveActiveModel, Entity as Leaves, Model as LeaveModel};
pub use super::lecture_sessions::{
    ActiveModel as LectureSessionActiveModel, Entity as LectureSessions,
    Model as LectureSessionModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::syllabi::{
    ActiveModel as SyllabusActiveModel, Entity as Syllabi, Model as SyllabusModel,
};
pub use super::syllabus_modules::{
    ActiveModel as SyllabusModuleActiveModel, Entity as SyllabusModules,
    Model as SyllabusModuleModel,
};
pub use super::syllabus_topics::{
    ActiveModel as SyllabusTopicActiveModel, Entity as SyllabusTopics,
    Model as SyllabusTopicModel,
};
pub use super::teacher_attendance::{
    ActiveModel as TeacherAttendanceActiveModel, Entity as TeacherAttendance,
    Model as TeacherAttendanceModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
