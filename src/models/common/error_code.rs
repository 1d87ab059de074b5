// 业务错误码
//
// 通用段对齐 HTTP 状态码，业务段按资源分段（1xxx 教师、2xxx 学生……）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用
    Success = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    InternalServerError = 500,

    // 教师 / 认证
    AuthFailed = 1001,
    RegisterFailed = 1002,
    TeacherNotFound = 1003,
    TeacherEmailAlreadyExists = 1004,
    TeacherCodeAlreadyExists = 1005,
    TeacherPasswordInvalid = 1006,
    TeacherEmailInvalid = 1007,
    TeacherUpdateFailed = 1008,

    // 学生
    StudentNotFound = 2001,
    StudentAlreadyExists = 2002,
    StudentCreationFailed = 2003,
    StudentUpdateFailed = 2004,
    StudentDeleteFailed = 2005,
    ImportDataInvalid = 2006,

    // 批次
    BatchNotFound = 3001,
    BatchAlreadyExists = 3002,
    BatchCreationFailed = 3003,
    BatchUpdateFailed = 3004,
    BatchDeleteFailed = 3005,

    // 科目
    SubjectNotFound = 4001,
    SubjectCreationFailed = 4002,
    SubjectUpdateFailed = 4003,
    SubjectDeleteFailed = 4004,

    // 课次
    LectureNotFound = 5001,
    LectureCodeAlreadyExists = 5002,
    LecturePermissionDenied = 5003,
    InvalidLectureStatus = 5004,

    // 学生考勤
    AttendanceAlreadyMarked = 6001,
    AttendanceNotFound = 6002,
    AttendanceMarkFailed = 6003,

    // 请假
    LeaveNotFound = 7001,
    InvalidLeaveStatus = 7002,
    LeaveApprovalFailed = 7003,

    // 教师考勤
    TeacherAttendanceAlreadyMarked = 8001,
    TeacherAttendanceNotFound = 8002,

    // 作业
    AssignmentNotFound = 9001,
    SubmissionNotFound = 9002,
    AssignmentCreationFailed = 9003,
    NoAssignmentsForBatch = 9004,

    // 大纲
    SyllabusNotFound = 10001,
    TopicNotFound = 10002,

    // 教学日志
    DiaryCreationFailed = 11001,

    // 报表
    ExportFailed = 12001,
}
