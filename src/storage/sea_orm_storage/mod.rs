//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod batches;
mod diary;
mod leaves;
mod lectures;
mod students;
mod subjects;
mod syllabus;
mod teacher_attendance;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{EduSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EduSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EduSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师模块
    async fn create_teacher(&self, teacher: RegisterTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_email_impl(email).await
    }

    async fn get_teacher_by_code(&self, teacher_code: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_code_impl(teacher_code).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_teachers(&self) -> Result<u64> {
        self.count_teachers_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_with_batch(&self, id: i64) -> Result<Option<StudentWithBatch>> {
        self.get_student_with_batch_impl(id).await
    }

    async fn get_student_by_enrollment(&self, enrollment_number: &str) -> Result<Option<Student>> {
        self.get_student_by_enrollment_impl(enrollment_number).await
    }

    async fn get_student_by_roll_in_batch(
        &self,
        roll_number: &str,
        batch_id: i64,
    ) -> Result<Option<Student>> {
        self.get_student_by_roll_in_batch_impl(roll_number, batch_id)
            .await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn list_students_by_batch(&self, batch_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_batch_impl(batch_id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 批次模块
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch> {
        self.create_batch_impl(batch).await
    }

    async fn get_batch_by_id(&self, id: i64) -> Result<Option<Batch>> {
        self.get_batch_by_id_impl(id).await
    }

    async fn get_batch_by_code(&self, batch_code: &str) -> Result<Option<Batch>> {
        self.get_batch_by_code_impl(batch_code).await
    }

    async fn get_batch_detail(&self, id: i64) -> Result<Option<BatchDetailResponse>> {
        self.get_batch_detail_impl(id).await
    }

    async fn list_batches_with_pagination(
        &self,
        query: BatchListQuery,
    ) -> Result<BatchListResponse> {
        self.list_batches_with_pagination_impl(query).await
    }

    async fn update_batch(&self, id: i64, update: UpdateBatchRequest) -> Result<Option<Batch>> {
        self.update_batch_impl(id, update).await
    }

    async fn delete_batch(&self, id: i64) -> Result<bool> {
        self.delete_batch_impl(id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_by_batch(&self, batch_id: i64) -> Result<Vec<SubjectWithTeacher>> {
        self.list_subjects_by_batch_impl(batch_id).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 课次模块
    async fn create_lecture(
        &self,
        teacher_id: i64,
        lecture: CreateLectureRequest,
    ) -> Result<LectureSession> {
        self.create_lecture_impl(teacher_id, lecture).await
    }

    async fn get_lecture_by_id(&self, id: i64) -> Result<Option<LectureSession>> {
        self.get_lecture_by_id_impl(id).await
    }

    async fn get_lecture_by_code(&self, session_code: &str) -> Result<Option<LectureSession>> {
        self.get_lecture_by_code_impl(session_code).await
    }

    async fn list_lectures_by_teacher(&self, teacher_id: i64) -> Result<Vec<LectureSession>> {
        self.list_lectures_by_teacher_impl(teacher_id).await
    }

    async fn update_lecture(&self, update: UpdateLectureRequest) -> Result<Option<LectureSession>> {
        self.update_lecture_impl(update).await
    }

    // 学生考勤模块
    async fn mark_attendance(
        &self,
        teacher_id: i64,
        request: MarkAttendanceRequest,
    ) -> Result<SessionAttendanceResponse> {
        self.mark_attendance_impl(teacher_id, request).await
    }

    async fn get_session_attendance(
        &self,
        lecture_session_id: i64,
    ) -> Result<Option<SessionAttendanceResponse>> {
        self.get_session_attendance_impl(lecture_session_id).await
    }

    async fn student_attendance_summary(
        &self,
        student_id: i64,
    ) -> Result<StudentAttendanceSummary> {
        self.student_attendance_summary_impl(student_id).await
    }

    async fn batch_attendance_rows(
        &self,
        batch_id: i64,
        subject_id: Option<i64>,
    ) -> Result<Vec<BatchAttendanceRow>> {
        self.batch_attendance_rows_impl(batch_id, subject_id).await
    }

    // 请假模块
    async fn apply_leave(&self, teacher_id: i64, request: ApplyLeaveRequest) -> Result<Leave> {
        self.apply_leave_impl(teacher_id, request).await
    }

    async fn get_leave_by_id(&self, id: i64) -> Result<Option<Leave>> {
        self.get_leave_by_id_impl(id).await
    }

    async fn list_leaves(&self, status: Option<LeaveStatus>) -> Result<Vec<Leave>> {
        self.list_leaves_impl(status).await
    }

    async fn list_leaves_by_teacher(&self, teacher_id: i64) -> Result<Vec<Leave>> {
        self.list_leaves_by_teacher_impl(teacher_id).await
    }

    async fn reject_leave(&self, id: i64, approved_by: i64) -> Result<Option<Leave>> {
        self.reject_leave_impl(id, approved_by).await
    }

    async fn apply_leave_approval(&self, id: i64, approved_by: i64) -> Result<Option<Leave>> {
        self.apply_leave_approval_impl(id, approved_by).await
    }

    // 教师考勤模块
    async fn mark_teacher_attendance(
        &self,
        marked_by: i64,
        request: MarkTeacherAttendanceRequest,
    ) -> Result<TeacherAttendanceRecord> {
        self.mark_teacher_attendance_impl(marked_by, request).await
    }

    async fn list_teacher_attendance_by_date(
        &self,
        date: chrono::NaiveDate,
    ) -> Result<Vec<TeacherAttendanceWithTeacher>> {
        self.list_teacher_attendance_by_date_impl(date).await
    }

    async fn list_teacher_attendance_records(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherAttendanceRecord>> {
        self.list_teacher_attendance_records_impl(teacher_id).await
    }

    // 绩效数据
    async fn session_present_ratios_for_teacher(&self, teacher_id: i64) -> Result<Vec<f64>> {
        self.session_present_ratios_for_teacher_impl(teacher_id)
            .await
    }

    async fn graded_submission_ratios_for_teacher(&self, teacher_id: i64) -> Result<Vec<f64>> {
        self.graded_submission_ratios_for_teacher_impl(teacher_id)
            .await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        teacher_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(teacher_id, assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_by_subject(
        &self,
        subject_id: i64,
    ) -> Result<Vec<AssignmentWithInfo>> {
        self.list_assignments_by_subject_impl(subject_id).await
    }

    async fn list_assignments_by_batch(&self, batch_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_batch_impl(batch_id).await
    }

    async fn submit_assignment(
        &self,
        assignment_id: i64,
        request: SubmitAssignmentRequest,
    ) -> Result<AssignmentSubmission> {
        self.submit_assignment_impl(assignment_id, request).await
    }

    async fn grade_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        request: GradeSubmissionRequest,
    ) -> Result<Option<AssignmentSubmission>> {
        self.grade_submission_impl(assignment_id, student_id, request)
            .await
    }

    async fn list_submissions_with_students(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionWithStudent>> {
        self.list_submissions_with_students_impl(assignment_id)
            .await
    }

    // 教学大纲模块
    async fn create_syllabus(&self, request: CreateSyllabusRequest) -> Result<Syllabus> {
        self.create_syllabus_impl(request).await
    }

    async fn get_syllabus_by_id(&self, id: i64) -> Result<Option<Syllabus>> {
        self.get_syllabus_by_id_impl(id).await
    }

    async fn complete_topic(
        &self,
        syllabus_id: i64,
        module_position: i32,
        topic_position: i32,
        completed_by: i64,
        request: CompleteTopicRequest,
    ) -> Result<Option<Syllabus>> {
        self.complete_topic_impl(
            syllabus_id,
            module_position,
            topic_position,
            completed_by,
            request,
        )
        .await
    }

    async fn syllabus_topic_counts(&self, id: i64) -> Result<Option<(i64, i64)>> {
        self.syllabus_topic_counts_impl(id).await
    }

    // 教学日志模块
    async fn create_diary_entry(
        &self,
        teacher_id: i64,
        request: CreateDiaryEntryRequest,
    ) -> Result<DiaryEntry> {
        self.create_diary_entry_impl(teacher_id, request).await
    }

    async fn list_diary_entries(&self, params: DiaryListParams) -> Result<Vec<DiaryEntry>> {
        self.list_diary_entries_impl(params).await
    }
}
