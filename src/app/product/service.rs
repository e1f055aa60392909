//! 产品存储访问
//!
//! 每个操作对应一条语句；Postgres 实现位于 `infrastructure::database`。

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::model::{Page, Product};

/// 存储错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Backend(String),
}

/// 按 ID 查询的结果
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Failed(StoreError),
}

impl<T> From<Result<Option<T>, StoreError>> for Lookup<T> {
    fn from(result: Result<Option<T>, StoreError>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) => Lookup::NotFound,
            Err(err) => Lookup::Failed(err),
        }
    }
}

/// 产品存储 trait
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get(&self, id: i32) -> Lookup<Product>;

    /// 按 ID 升序返回 `page` 范围内的产品
    async fn list(&self, page: Page) -> Result<Vec<Product>, StoreError>;

    /// 插入产品并把生成的 ID 写回 `product.id`
    async fn create(&self, product: &mut Product) -> Result<(), StoreError>;

    /// ID 不存在时什么也不做
    async fn update(&self, product: &Product) -> Result<(), StoreError>;

    /// ID 不存在时什么也不做
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}

/// 内存存储，ID 从 1 开始递增
#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<MemoryTable>,
}

#[derive(Default)]
struct MemoryTable {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn get(&self, id: i32) -> Lookup<Product> {
        match self.inner.read().await.rows.get(&id) {
            Some(product) => Lookup::Found(product.clone()),
            None => Lookup::NotFound,
        }
    }

    async fn list(&self, page: Page) -> Result<Vec<Product>, StoreError> {
        let table = self.inner.read().await;
        let skip = usize::try_from(page.start).unwrap_or(usize::MAX);
        let take = usize::try_from(page.count).unwrap_or(0);
        Ok(table.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn create(&self, product: &mut Product) -> Result<(), StoreError> {
        let mut table = self.inner.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend("product id sequence exhausted".to_string()))?;
        table.last_id = id;
        product.id = id;
        table.rows.insert(id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        let mut table = self.inner.write().await;
        if let Some(row) = table.rows.get_mut(&product.id) {
            row.name = product.name.clone();
            row.price = product.price;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}
