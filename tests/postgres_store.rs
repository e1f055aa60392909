//! Postgres 存储测试
//!
//! 需要可写的数据库：`TEST_DATABASE_URL=postgres://... cargo test -- --ignored`
#![cfg(feature = "database")]

use product_api::app::product::model::{Page, Product};
use product_api::app::product::service::{Lookup, ProductStore};
use product_api::config::DatabaseConfig;
use product_api::infrastructure::database::{DatabaseManager, PgProductStore};

async fn connect() -> PgProductStore {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a writable Postgres database");

    let config = DatabaseConfig {
        url: Some(url),
        min_connections: 0,
        max_connections: 2,
        ..DatabaseConfig::default()
    };
    let manager = DatabaseManager::new(&config).await.unwrap();
    let pool = manager.get_pool().clone();

    let store = PgProductStore::new(pool.clone());
    store.ensure_table().await.unwrap();
    sqlx::query("DELETE FROM products").execute(&pool).await.unwrap();
    store
}

#[tokio::test]
#[ignore = "requires a Postgres database via TEST_DATABASE_URL"]
async fn test_postgres_crud_round_trip() {
    let store = connect().await;

    let mut widget = Product::new("widget", 9.99);
    store.create(&mut widget).await.unwrap();
    assert!(widget.id > 0);

    match store.get(widget.id).await {
        Lookup::Found(found) => assert_eq!(found, widget),
        other => panic!("unexpected lookup: {:?}", other),
    }

    for i in 0..12 {
        let mut product = Product::new(format!("bulk-{}", i), 1.0);
        store.create(&mut product).await.unwrap();
    }
    let first_page = store.list(Page::clamped(0, 10)).await.unwrap();
    assert_eq!(first_page.len(), 10);
    assert_eq!(first_page[0], widget);
    let tail = store.list(Page::clamped(10, 10)).await.unwrap();
    assert_eq!(tail.len(), 3);

    let renamed = Product {
        id: widget.id,
        name: "widget v2".to_string(),
        price: 12.5,
    };
    store.update(&renamed).await.unwrap();
    assert!(matches!(store.get(widget.id).await, Lookup::Found(p) if p == renamed));

    store.delete(widget.id).await.unwrap();
    assert!(matches!(store.get(widget.id).await, Lookup::NotFound));

    // 不存在的 ID 更新和删除都不报错
    store.update(&renamed).await.unwrap();
    store.delete(widget.id).await.unwrap();
}
