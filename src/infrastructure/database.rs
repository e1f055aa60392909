//! 数据库基础设施

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::info;

use crate::app::product::model::{Page, Product};
use crate::app::product::service::{Lookup, ProductStore, StoreError};
use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 按配置建立连接池
    ///
    /// 配置了 `url` 时直接使用，否则由用户名、密码、库名拼出连接参数（禁用 SSL）。
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("Connecting to database: {}", config.describe());

        let options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout());

        let pool = match &config.url {
            Some(url) => options.connect(url).await?,
            None => {
                let connect = PgConnectOptions::new()
                    .host(&config.host)
                    .port(config.port)
                    .username(&config.user)
                    .password(&config.password)
                    .database(&config.dbname)
                    .ssl_mode(PgSslMode::Disable);
                options.connect_with(connect).await?
            }
        };

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}

/// 基于 Postgres 的产品存储
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 表不存在时创建 products 表
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                price NUMERIC(10, 2) NOT NULL DEFAULT 0.00
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("products table ready");
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn get(&self, id: i32) -> Lookup<Product> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from)
        .into()
    }

    async fn list(&self, page: Page) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.count)
        .bind(page.start)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn create(&self, product: &mut Product) -> Result<(), StoreError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id")
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await?;

        product.id = id;
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        sqlx::query("UPDATE products SET name = $1, price = $2 WHERE id = $3")
            .bind(&product.name)
            .bind(product.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
