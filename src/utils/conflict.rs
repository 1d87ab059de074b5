//! 重复键冲突的统一响应
//!
//! 所有“唯一键已存在”类错误返回 400 + 对应业务错误码。

use actix_web::HttpResponse;

use crate::models::{ApiResponse, ErrorCode};

pub fn duplicate_key_response(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_duplicate_key_maps_to_400() {
        for code in [
            ErrorCode::StudentAlreadyExists,
            ErrorCode::TeacherEmailAlreadyExists,
            ErrorCode::BatchAlreadyExists,
            ErrorCode::LectureCodeAlreadyExists,
            ErrorCode::AttendanceAlreadyMarked,
            ErrorCode::TeacherAttendanceAlreadyMarked,
        ] {
            let response = duplicate_key_response(code, "already exists");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}
