//! 对象缓存抽象
//!
//! 统一的键值缓存接口，目前只有进程内 Moka 实现，主要用来缓存
//! 登录态（token -> 教师对象），避免每个请求都查库。

pub mod object_cache;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// ttl 单位为秒，传 0 表示使用全局默认
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

pub fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache = object_cache::moka::MokaCacheWrapper::new()?;
    Ok(Arc::new(cache))
}
