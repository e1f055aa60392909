//! # 产品 CRUD 服务
//!
//! 基于 Axum 的分层 JSON API：
//! - `app`: 路由与处理器（产品资源）
//! - `core`: 错误映射、中间件、响应体
//! - `infrastructure`: 数据库连接、日志
//! - `config`: 配置加载与校验

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppContext};
pub use config::Config;
