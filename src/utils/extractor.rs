//! 路径参数安全提取器
//!
//! actix-web 默认的 `web::Path<i64>` 解析失败时返回的错误体不是统一的
//! ApiResponse 格式，这里为每类路径参数定义一个提取器，解析失败统一
//! 返回 400 + 标准响应体。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                match raw.parse::<i64>() {
                    Ok(id) if id > 0 => ready(Ok($name(id))),
                    _ => {
                        let message = format!("Invalid path parameter '{}': {raw}", $param);
                        let response = HttpResponse::BadRequest().json(
                            ApiResponse::<()>::error_empty(ErrorCode::BadRequest, &message),
                        );
                        ready(Err(InternalError::from_response(message, response).into()))
                    }
                }
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeTeacherIdI64, "teacher_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeBatchIdI64, "batch_id");
define_safe_i64_extractor!(SafeSubjectIdI64, "subject_id");
define_safe_i64_extractor!(SafeLectureIdI64, "lecture_session_id");
