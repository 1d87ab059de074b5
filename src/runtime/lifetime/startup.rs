use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::ObjectCache;
use crate::models::teachers::entities::TeacherRole;
use crate::models::teachers::requests::RegisterTeacherRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_random_code;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 初始化默认管理员账号
/// 数据库中没有任何教师时创建一个默认 admin 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_teachers().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} teacher(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No teachers found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count teachers: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_code(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = RegisterTeacherRequest {
        teacher_code: "ADMIN001".to_string(),
        name: "Administrator".to_string(),
        email: "admin@localhost".to_string(),
        password: password_hash,
        phone: None,
        department: "Administration".to_string(),
        role: Some(TeacherRole::Admin),
    };

    match storage.create_teacher(admin_request).await {
        Ok(teacher) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                teacher.id, teacher.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储与缓存的初始化
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    let cache = crate::cache::create_cache().expect("Failed to create cache");
    warn!("Cache backend initialized");

    StartupContext { storage, cache }
}
