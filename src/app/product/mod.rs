//! 产品资源

pub mod handler;
pub mod model;
pub mod service;

use axum::{routing::get, Router};

use super::AppContext;

pub fn routes() -> Router<AppContext> {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/product/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
