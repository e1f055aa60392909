//! 应用层

pub mod product;

use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use product::service::ProductStore;

/// 应用上下文，启动时构造一次，通过 `State` 传给每个处理器
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductStore>,
}

impl AppContext {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }
}

pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .merge(product::routes())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
