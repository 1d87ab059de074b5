pub mod conflict;
pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod pdf;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use conflict::duplicate_key_response;
pub use extractor::{
    SafeBatchIdI64, SafeIDI64, SafeLectureIdI64, SafeStudentIdI64, SafeSubjectIdI64,
    SafeTeacherIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
