/*!
 * JWT 认证中间件
 *
 * 验证 Authorization 头中的 access token，并把对应的教师对象写入请求扩展，
 * 供后续处理程序使用。
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件提取并验证 JWT 令牌
 * 3. 优先从缓存取教师对象，未命中再查存储并回填缓存
 * 4. 如果令牌无效或缺失，返回 401 未授权错误
 *
 * ## 配置
 *
 * 确保设置了 `EDUSYS_JWT_SECRET`（或配置文件中的 jwt.secret）。
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::teachers::entities::{Teacher, TeacherRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Teacher, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取教师信息
    match cache.get_raw(&format!("teacher:{token}")).await {
        CacheResult::Found(json) => match serde_json::from_str::<Teacher>(&json) {
            Ok(teacher) => return Ok(teacher),
            Err(_) => {
                cache.remove(&format!("teacher:{token}")).await;
                info!(
                    "Failed to deserialize teacher from cache for token: {}",
                    token
                );
            }
        },
        _ => {
            info!("Teacher not found in cache for token: {}", token);
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let teacher_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid teacher ID in JWT".to_string())?;

    let teacher = storage
        .get_teacher_by_id(teacher_id)
        .await
        .map_err(|_| "Failed to retrieve teacher from storage".to_string())?
        .ok_or_else(|| "Teacher not found".to_string())?;

    // 将教师信息存入缓存
    let app_config = AppConfig::get();
    if let Ok(teacher_json) = serde_json::to_string(&teacher) {
        cache
            .insert_raw(
                format!("teacher:{token}"),
                teacher_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok(teacher)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(teacher) => {
                    debug!("JWT authentication successful for ID: {}", teacher.id);
                    req.extensions_mut().insert(teacher);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取教师信息
impl RequireJWT {
    /// 从请求扩展中提取已认证的教师对象
    /// 此函数应该在应用了 RequireJWT 中间件的路由处理程序中使用
    pub fn extract_teacher(req: &actix_web::HttpRequest) -> Option<Teacher> {
        req.extensions().get::<Teacher>().cloned()
    }

    /// 从请求扩展中提取教师 ID
    pub fn extract_teacher_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Teacher>().map(|teacher| teacher.id)
    }

    /// 从请求扩展中提取教师角色
    pub fn extract_teacher_role(req: &actix_web::HttpRequest) -> Option<TeacherRole> {
        req.extensions()
            .get::<Teacher>()
            .map(|teacher| teacher.role.clone())
    }
}
