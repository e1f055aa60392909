//! 产品处理器

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::{debug, info};

use super::model::{parse_product_id, Page, Product};
use super::service::Lookup;
use crate::app::AppContext;
use crate::core::{error::CoreError, response::ResultResponse};

/// 路径段解码失败（例如非 UTF-8）和数字解析失败同样按无效 ID 处理
fn product_id(path: Result<Path<String>, PathRejection>) -> Result<i32, CoreError> {
    let Path(raw) = path?;
    parse_product_id(&raw).ok_or_else(CoreError::invalid_product_id)
}

/// 请求体读取失败（包括超过大小上限）和 JSON 解码失败同样按无效请求体处理
fn decode_product(body: Result<Bytes, BytesRejection>) -> Result<Product, CoreError> {
    let body = body?;
    serde_json::from_slice(&body).map_err(|err| {
        debug!("rejecting product payload: {}", err);
        CoreError::invalid_payload()
    })
}

/// GET /products?start=&count=
pub async fn list_products(
    State(ctx): State<AppContext>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let page = Page::from_query(&params);
    let products = ctx.products.list(page).await?;
    Ok(Json(products))
}

/// GET /product/:id
pub async fn get_product(
    State(ctx): State<AppContext>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = product_id(path)?;

    match ctx.products.get(id).await {
        Lookup::Found(product) => Ok(Json(product)),
        Lookup::NotFound => Err(CoreError::product_not_found()),
        Lookup::Failed(err) => Err(err.into()),
    }
}

/// POST /products
pub async fn create_product(
    State(ctx): State<AppContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let mut product = decode_product(body)?;
    ctx.products.create(&mut product).await?;

    info!("Created product: {} ({})", product.name, product.id);
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /product/:id
///
/// 请求体中的 id 总是被路径中的 id 覆盖。
pub async fn update_product(
    State(ctx): State<AppContext>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = product_id(path)?;
    let mut product = decode_product(body)?;
    product.id = id;

    ctx.products.update(&product).await?;
    Ok(Json(product))
}

/// DELETE /product/:id
pub async fn delete_product(
    State(ctx): State<AppContext>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ResultResponse>, CoreError> {
    let id = product_id(path)?;
    ctx.products.delete(id).await?;
    Ok(Json(ResultResponse::success()))
}
