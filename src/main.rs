use anyhow::{Context, Result};
use product_api::app::product::service::{MemoryProductStore, ProductStore};
use product_api::config::{Config, LoggingConfig, StoreBackend};
use product_api::infrastructure::logger::Logger;
use product_api::{build_router, AppContext};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // 配置文件路径：第一个命令行参数，或 PRODUCT_API_CONFIG
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PRODUCT_API_CONFIG").ok())
        .map(PathBuf::from);

    // 配置加载失败时按默认级别初始化日志，保证错误经 tracing 输出
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => {
            Logger::init(&config.logging);
            config
        }
        Err(err) => {
            Logger::init(&LoggingConfig::default());
            error!("加载配置失败: {}", err);
            return Err(err).context("加载配置失败");
        }
    };

    info!("启动产品 API 服务器...");

    let store = open_store(&config).await.map_err(|err| {
        error!("初始化存储失败: {:#}", err);
        err
    })?;
    let app = build_router(AppContext::new(store));

    let addr = config.http.address();
    let listener = TcpListener::bind(&addr).await.map_err(|err| {
        error!("无法绑定到 {}: {}", addr, err);
        anyhow::Error::new(err).context(format!("无法绑定到 {}", addr))
    })?;

    info!("🚀 产品 API 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products      - 获取产品列表 (start, count)");
    info!("   POST   /products      - 创建产品");
    info!("   GET    /product/:id   - 获取产品");
    info!("   PUT    /product/:id   - 更新产品");
    info!("   DELETE /product/:id   - 删除产品");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn open_store(config: &Config) -> Result<Arc<dyn ProductStore>> {
    match config.database.backend {
        StoreBackend::Memory => {
            info!("存储后端: memory");
            Ok(Arc::new(MemoryProductStore::new()))
        }
        #[cfg(feature = "database")]
        StoreBackend::Postgres => {
            use product_api::infrastructure::database::{DatabaseManager, PgProductStore};

            info!("存储后端: postgres");
            let manager = DatabaseManager::new(&config.database)
                .await
                .context("无法连接数据库")?;
            let store = PgProductStore::new(manager.get_pool().clone());
            if config.database.ensure_schema {
                store.ensure_table().await.context("创建 products 表失败")?;
            }
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "database"))]
        StoreBackend::Postgres => anyhow::bail!("postgres 后端需要启用 database 特性"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("无法监听 Ctrl+C: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("无法监听 SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
