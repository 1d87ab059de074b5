use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentSubmission},
        requests::{CreateAssignmentRequest, GradeSubmissionRequest, SubmitAssignmentRequest},
        responses::{AssignmentWithInfo, SubmissionWithStudent},
    },
    attendance::{
        requests::MarkAttendanceRequest,
        responses::{BatchAttendanceRow, SessionAttendanceResponse, StudentAttendanceSummary},
    },
    batches::{
        entities::Batch,
        requests::{BatchListQuery, CreateBatchRequest, UpdateBatchRequest},
        responses::{BatchDetailResponse, BatchListResponse},
    },
    diary::{entities::DiaryEntry, requests::CreateDiaryEntryRequest, requests::DiaryListParams},
    leaves::{
        entities::{Leave, LeaveStatus},
        requests::ApplyLeaveRequest,
    },
    lectures::{
        entities::LectureSession,
        requests::{CreateLectureRequest, UpdateLectureRequest},
    },
    students::{
        entities::{Student, StudentWithBatch},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::{Subject, SubjectWithTeacher},
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
    syllabus::{
        entities::Syllabus,
        requests::{CompleteTopicRequest, CreateSyllabusRequest},
    },
    teacher_attendance::{
        entities::TeacherAttendanceRecord,
        requests::MarkTeacherAttendanceRequest,
        responses::TeacherAttendanceWithTeacher,
    },
    teachers::{
        entities::Teacher,
        requests::{RegisterTeacherRequest, TeacherListQuery, UpdateProfileRequest},
        responses::TeacherListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师（password 字段为已哈希的密码）
    async fn create_teacher(&self, teacher: RegisterTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过邮箱获取教师信息
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 通过工号获取教师信息
    async fn get_teacher_by_code(&self, teacher_code: &str) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    // 更新教师资料
    async fn update_teacher(&self, id: i64, update: UpdateProfileRequest)
    -> Result<Option<Teacher>>;
    // 更新教师最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过ID获取学生及批次信息
    async fn get_student_with_batch(&self, id: i64) -> Result<Option<StudentWithBatch>>;
    // 通过注册号获取学生信息
    async fn get_student_by_enrollment(&self, enrollment_number: &str) -> Result<Option<Student>>;
    // 通过批次内学号获取学生信息
    async fn get_student_by_roll_in_batch(
        &self,
        roll_number: &str,
        batch_id: i64,
    ) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 列出批次内全部学生
    async fn list_students_by_batch(&self, batch_id: i64) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 批次管理方法
    // 创建批次
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch>;
    // 通过ID获取批次信息
    async fn get_batch_by_id(&self, id: i64) -> Result<Option<Batch>>;
    // 通过批次编号获取批次信息
    async fn get_batch_by_code(&self, batch_code: &str) -> Result<Option<Batch>>;
    // 获取批次详情（学生、科目、任课教师）
    async fn get_batch_detail(&self, id: i64) -> Result<Option<BatchDetailResponse>>;
    // 列出批次
    async fn list_batches_with_pagination(&self, query: BatchListQuery)
    -> Result<BatchListResponse>;
    // 更新批次信息
    async fn update_batch(&self, id: i64, update: UpdateBatchRequest) -> Result<Option<Batch>>;
    // 删除批次
    async fn delete_batch(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目信息
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 列出批次内的科目（附任课教师信息）
    async fn list_subjects_by_batch(&self, batch_id: i64) -> Result<Vec<SubjectWithTeacher>>;
    // 更新科目信息
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除科目（不级联）
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 课次管理方法
    // 创建课次
    async fn create_lecture(
        &self,
        teacher_id: i64,
        lecture: CreateLectureRequest,
    ) -> Result<LectureSession>;
    // 通过ID获取课次信息
    async fn get_lecture_by_id(&self, id: i64) -> Result<Option<LectureSession>>;
    // 通过课次编号获取课次信息
    async fn get_lecture_by_code(&self, session_code: &str) -> Result<Option<LectureSession>>;
    // 列出教师的课次（按日期倒序）
    async fn list_lectures_by_teacher(&self, teacher_id: i64) -> Result<Vec<LectureSession>>;
    // 更新课次状态（可携带新日期/时间）
    async fn update_lecture(&self, update: UpdateLectureRequest) -> Result<Option<LectureSession>>;

    /// 学生考勤方法
    // 登记考勤。同一事务内对 attendance_taken 做条件更新，
    // 重复登记（包括并发场景）返回 Conflict。
    async fn mark_attendance(
        &self,
        teacher_id: i64,
        request: MarkAttendanceRequest,
    ) -> Result<SessionAttendanceResponse>;
    // 获取单课次考勤详情（课次存在但未登记时返回 None）
    async fn get_session_attendance(
        &self,
        lecture_session_id: i64,
    ) -> Result<Option<SessionAttendanceResponse>>;
    // 学生考勤汇总（按需从原始考勤行重算）
    async fn student_attendance_summary(
        &self,
        student_id: i64,
    ) -> Result<StudentAttendanceSummary>;
    // 批次内每个学生的考勤汇总行（可按科目过滤）
    async fn batch_attendance_rows(
        &self,
        batch_id: i64,
        subject_id: Option<i64>,
    ) -> Result<Vec<BatchAttendanceRow>>;

    /// 请假管理方法
    // 提交请假申请
    async fn apply_leave(&self, teacher_id: i64, request: ApplyLeaveRequest) -> Result<Leave>;
    // 通过ID获取请假单
    async fn get_leave_by_id(&self, id: i64) -> Result<Option<Leave>>;
    // 列出请假单（可按状态过滤）
    async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<Leave>>;
    // 列出教师的请假单
    async fn list_leaves_by_teacher(&self, teacher_id: i64) -> Result<Vec<Leave>>;
    // 驳回请假
    async fn reject_leave(&self, id: i64, approved_by: i64) -> Result<Option<Leave>>;
    // 批准请假。单个事务内更新状态并为 [start, end] 的每一天补写
    // On-Leave 教师考勤（已有记录的日期跳过），任一步失败整体回滚。
    async fn apply_leave_approval(&self, id: i64, approved_by: i64) -> Result<Option<Leave>>;

    /// 教师考勤方法
    // 登记教师考勤，(teacher, date) 唯一
    async fn mark_teacher_attendance(
        &self,
        marked_by: i64,
        request: MarkTeacherAttendanceRequest,
    ) -> Result<TeacherAttendanceRecord>;
    // 某日全部教师考勤（附教师信息）
    async fn list_teacher_attendance_by_date(
        &self,
        date: chrono::NaiveDate,
    ) -> Result<Vec<TeacherAttendanceWithTeacher>>;
    // 教师的全部考勤记录
    async fn list_teacher_attendance_records(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherAttendanceRecord>>;

    /// 绩效数据方法
    // 教师已登记考勤课次的每课次出勤比（0-100）
    async fn session_present_ratios_for_teacher(&self, teacher_id: i64) -> Result<Vec<f64>>;
    // 教师所布置作业中已评分提交的得分率（0-100）
    async fn graded_submission_ratios_for_teacher(&self, teacher_id: i64) -> Result<Vec<f64>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出科目下的作业（附教师/批次信息）
    async fn list_assignments_by_subject(
        &self,
        subject_id: i64,
    ) -> Result<Vec<AssignmentWithInfo>>;
    // 列出批次下的作业
    async fn list_assignments_by_batch(&self, batch_id: i64) -> Result<Vec<Assignment>>;
    // 学生提交作业（重复提交覆盖旧行并重置为 Submitted）
    async fn submit_assignment(
        &self,
        assignment_id: i64,
        request: SubmitAssignmentRequest,
    ) -> Result<AssignmentSubmission>;
    // 评分（提交不存在时返回 None）
    async fn grade_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        request: GradeSubmissionRequest,
    ) -> Result<Option<AssignmentSubmission>>;
    // 作业的全部提交（附学生信息）
    async fn list_submissions_with_students(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionWithStudent>>;

    /// 教学大纲方法
    // 创建大纲（模块 → 知识点树，单事务）
    async fn create_syllabus(&self, request: CreateSyllabusRequest) -> Result<Syllabus>;
    // 获取完整大纲树
    async fn get_syllabus_by_id(&self, id: i64) -> Result<Option<Syllabus>>;
    // 按模块/知识点序号标记完成（越界返回 None）
    async fn complete_topic(
        &self,
        syllabus_id: i64,
        module_position: i32,
        topic_position: i32,
        completed_by: i64,
        request: CompleteTopicRequest,
    ) -> Result<Option<Syllabus>>;
    // 大纲知识点计数 (total, completed)，大纲不存在时返回 None
    async fn syllabus_topic_counts(&self, id: i64) -> Result<Option<(i64, i64)>>;

    /// 教学日志方法
    // 创建日志。引用的大纲知识点在同一事务内标记完成。
    async fn create_diary_entry(
        &self,
        teacher_id: i64,
        request: CreateDiaryEntryRequest,
    ) -> Result<DiaryEntry>;
    // 按条件列出日志
    async fn list_diary_entries(&self, params: DiaryListParams) -> Result<Vec<DiaryEntry>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
