use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::TeacherCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Phone).string().null())
                    .col(ColumnDef::new(Teachers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Teachers::Department).string().not_null())
                    .col(ColumnDef::new(Teachers::Role).string().not_null())
                    .col(ColumnDef::new(Teachers::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建批次（班级）表
        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Batches::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Batches::BatchCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Batches::Name).string().not_null())
                    .col(ColumnDef::new(Batches::Year).integer().not_null())
                    .col(ColumnDef::new(Batches::Department).string().not_null())
                    .col(ColumnDef::new(Batches::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Batches::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::RollNumber).string().not_null())
                    .col(
                        ColumnDef::new(Students::EnrollmentNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::GuardianName).string().null())
                    .col(ColumnDef::new(Students::GuardianPhone).string().null())
                    .col(ColumnDef::new(Students::BatchId).big_integer().not_null())
                    .col(ColumnDef::new(Students::Department).string().null())
                    .col(ColumnDef::new(Students::Year).integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 同一批次内学号唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_students_roll_batch")
                    .table(Students::Table)
                    .col(Students::RollNumber)
                    .col(Students::BatchId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Code).string().not_null())
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Department).string().null())
                    .col(ColumnDef::new(Subjects::Year).integer().null())
                    .col(ColumnDef::new(Subjects::Semester).integer().null())
                    .col(ColumnDef::new(Subjects::Credits).integer().null())
                    .col(ColumnDef::new(Subjects::Description).string().null())
                    .col(ColumnDef::new(Subjects::BatchId).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课次表
        manager
            .create_table(
                Table::create()
                    .table(LectureSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LectureSessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LectureSessions::SessionCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(LectureSessions::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LectureSessions::BatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LectureSessions::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LectureSessions::Date).date().not_null())
                    .col(ColumnDef::new(LectureSessions::StartTime).string().not_null())
                    .col(ColumnDef::new(LectureSessions::EndTime).string().not_null())
                    .col(ColumnDef::new(LectureSessions::Topic).string().null())
                    .col(ColumnDef::new(LectureSessions::DiaryNote).string().null())
                    .col(ColumnDef::new(LectureSessions::Status).string().not_null())
                    .col(
                        ColumnDef::new(LectureSessions::AttendanceTaken)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LectureSessions::AttendanceId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LectureSessions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LectureSessions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤记录表（每课次一条）
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::LectureSessionId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::BatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::Date).date().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤明细表（学生出/缺勤划分）
        manager
            .create_table(
                Table::create()
                    .table(AttendanceEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceEntries::AttendanceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceEntries::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceEntries::Present)
                            .boolean()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_entries_att_student")
                    .table(AttendanceEntries::Table)
                    .col(AttendanceEntries::AttendanceId)
                    .col(AttendanceEntries::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建教师考勤表，(teacher, date) 唯一
        manager
            .create_table(
                Table::create()
                    .table(TeacherAttendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherAttendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherAttendance::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherAttendance::Date).date().not_null())
                    .col(ColumnDef::new(TeacherAttendance::Status).string().not_null())
                    .col(ColumnDef::new(TeacherAttendance::Remarks).string().null())
                    .col(
                        ColumnDef::new(TeacherAttendance::MarkedBy)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TeacherAttendance::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_attendance_teacher_date")
                    .table(TeacherAttendance::Table)
                    .col(TeacherAttendance::TeacherId)
                    .col(TeacherAttendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建请假表
        manager
            .create_table(
                Table::create()
                    .table(Leaves::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leaves::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Leaves::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Leaves::StartDate).date().not_null())
                    .col(ColumnDef::new(Leaves::EndDate).date().not_null())
                    .col(ColumnDef::new(Leaves::Reason).string().not_null())
                    .col(ColumnDef::new(Leaves::Status).string().not_null())
                    .col(ColumnDef::new(Leaves::ApprovedBy).big_integer().null())
                    .col(ColumnDef::new(Leaves::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Leaves::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).string().null())
                    .col(ColumnDef::new(Assignments::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::BatchId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::DueDate).date().not_null())
                    .col(ColumnDef::new(Assignments::MaxMarks).double().not_null())
                    .col(ColumnDef::new(Assignments::Attachments).string().null())
                    .col(ColumnDef::new(Assignments::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建作业提交表，(assignment, student) 唯一
        manager
            .create_table(
                Table::create()
                    .table(AssignmentSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentSubmissions::SubmittedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(AssignmentSubmissions::FileUrl).string().null())
                    .col(
                        ColumnDef::new(AssignmentSubmissions::Status)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignmentSubmissions::Marks).double().null())
                    .col(ColumnDef::new(AssignmentSubmissions::Remarks).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_assignment_student")
                    .table(AssignmentSubmissions::Table)
                    .col(AssignmentSubmissions::AssignmentId)
                    .col(AssignmentSubmissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建教学大纲表
        manager
            .create_table(
                Table::create()
                    .table(Syllabi::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Syllabi::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Syllabi::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Syllabi::BatchId).big_integer().not_null())
                    .col(ColumnDef::new(Syllabi::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Syllabi::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 大纲模块表
        manager
            .create_table(
                Table::create()
                    .table(SyllabusModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SyllabusModules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SyllabusModules::SyllabusId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SyllabusModules::Position)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SyllabusModules::Title).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 大纲知识点表
        manager
            .create_table(
                Table::create()
                    .table(SyllabusTopics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SyllabusTopics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SyllabusTopics::ModuleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SyllabusTopics::Position).integer().not_null())
                    .col(ColumnDef::new(SyllabusTopics::Title).string().not_null())
                    .col(
                        ColumnDef::new(SyllabusTopics::IsCompleted)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SyllabusTopics::CompletedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SyllabusTopics::CompletedBy)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(SyllabusTopics::Proofs).string().null())
                    .col(ColumnDef::new(SyllabusTopics::Notes).string().null())
                    .to_owned(),
            )
            .await?;

        // 教学日志表
        manager
            .create_table(
                Table::create()
                    .table(DiaryEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DiaryEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DiaryEntries::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(DiaryEntries::BatchId).big_integer().not_null())
                    .col(
                        ColumnDef::new(DiaryEntries::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DiaryEntries::LectureDate).date().not_null())
                    .col(ColumnDef::new(DiaryEntries::Notes).string().null())
                    .col(ColumnDef::new(DiaryEntries::Proofs).string().null())
                    .col(ColumnDef::new(DiaryEntries::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 教学日志覆盖知识点表
        manager
            .create_table(
                Table::create()
                    .table(DiaryTopics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DiaryTopics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DiaryTopics::DiaryEntryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DiaryTopics::TopicId).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiaryTopics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DiaryEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SyllabusTopics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SyllabusModules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Syllabi::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Leaves::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherAttendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LectureSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    TeacherCode,
    Name,
    Email,
    Phone,
    PasswordHash,
    Department,
    Role,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Batches {
    #[sea_orm(iden = "batches")]
    Table,
    Id,
    BatchCode,
    Name,
    Year,
    Department,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    RollNumber,
    EnrollmentNumber,
    Name,
    Email,
    Phone,
    GuardianName,
    GuardianPhone,
    BatchId,
    Department,
    Year,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Code,
    Name,
    Department,
    Year,
    Semester,
    Credits,
    Description,
    BatchId,
    TeacherId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LectureSessions {
    #[sea_orm(iden = "lecture_sessions")]
    Table,
    Id,
    SessionCode,
    SubjectId,
    BatchId,
    TeacherId,
    Date,
    StartTime,
    EndTime,
    Topic,
    DiaryNote,
    Status,
    AttendanceTaken,
    AttendanceId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    #[sea_orm(iden = "attendance_records")]
    Table,
    Id,
    LectureSessionId,
    SubjectId,
    BatchId,
    TeacherId,
    Date,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AttendanceEntries {
    #[sea_orm(iden = "attendance_entries")]
    Table,
    Id,
    AttendanceId,
    StudentId,
    Present,
}

#[derive(DeriveIden)]
enum TeacherAttendance {
    #[sea_orm(iden = "teacher_attendance")]
    Table,
    Id,
    TeacherId,
    Date,
    Status,
    Remarks,
    MarkedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Leaves {
    #[sea_orm(iden = "leaves")]
    Table,
    Id,
    TeacherId,
    StartDate,
    EndDate,
    Reason,
    Status,
    ApprovedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    Title,
    Description,
    SubjectId,
    BatchId,
    TeacherId,
    DueDate,
    MaxMarks,
    Attachments,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssignmentSubmissions {
    #[sea_orm(iden = "assignment_submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    SubmittedAt,
    FileUrl,
    Status,
    Marks,
    Remarks,
}

#[derive(DeriveIden)]
enum Syllabi {
    #[sea_orm(iden = "syllabi")]
    Table,
    Id,
    SubjectId,
    BatchId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SyllabusModules {
    #[sea_orm(iden = "syllabus_modules")]
    Table,
    Id,
    SyllabusId,
    Position,
    Title,
}

#[derive(DeriveIden)]
enum SyllabusTopics {
    #[sea_orm(iden = "syllabus_topics")]
    Table,
    Id,
    ModuleId,
    Position,
    Title,
    IsCompleted,
    CompletedAt,
    CompletedBy,
    Proofs,
    Notes,
}

#[derive(DeriveIden)]
enum DiaryEntries {
    #[sea_orm(iden = "diary_entries")]
    Table,
    Id,
    TeacherId,
    BatchId,
    SubjectId,
    LectureDate,
    Notes,
    Proofs,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DiaryTopics {
    #[sea_orm(iden = "diary_topics")]
    Table,
    Id,
    DiaryEntryId,
    TopicId,
}
