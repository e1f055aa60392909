//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 列表默认（也是最大）返回条数
pub const MAX_PAGE_SIZE: i64 = 10;

/// 产品
///
/// `id` 为 0 表示尚未持久化；解码时缺失的字段取零值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
        }
    }
}

/// 列表查询的偏移量和条数，已经过修正
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: i64,
    pub count: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            start: 0,
            count: MAX_PAGE_SIZE,
        }
    }
}

impl Page {
    /// 修正偏移量和条数：`start < 0` 取 0，`count` 不在 [1, 10] 内取 10
    pub fn clamped(start: i64, count: i64) -> Self {
        let start = start.max(0);
        let count = if (1..=MAX_PAGE_SIZE).contains(&count) {
            count
        } else {
            MAX_PAGE_SIZE
        };
        Self { start, count }
    }

    /// 从查询参数构造，参数重复时取第一个，无法解析的值按 0 处理
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| parse_or_zero(v))
                .unwrap_or(0)
        };
        Self::clamped(first("start"), first("count"))
    }
}

fn parse_or_zero(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

/// 解析路径中的产品 ID，只接受十进制数字
pub fn parse_product_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_count_outside_range_becomes_ten() {
        for count in [-100, -1, 0, 11, 50, i64::MAX, i64::MIN] {
            assert_eq!(Page::clamped(0, count).count, 10, "count = {}", count);
        }
        for count in 1..=10 {
            assert_eq!(Page::clamped(0, count).count, count);
        }
    }

    #[test]
    fn test_negative_start_becomes_zero() {
        for start in [-1, -42, i64::MIN] {
            assert_eq!(Page::clamped(start, 5).start, 0);
        }
        assert_eq!(Page::clamped(7, 5).start, 7);
    }

    #[test]
    fn test_from_query_defaults() {
        assert_eq!(Page::from_query(&[]), Page::default());
        assert_eq!(
            Page::from_query(&query(&[("start", "abc"), ("count", "x1")])),
            Page { start: 0, count: 10 }
        );
        assert_eq!(
            Page::from_query(&query(&[("start", "3"), ("count", "4")])),
            Page { start: 3, count: 4 }
        );
    }

    #[test]
    fn test_from_query_first_value_wins() {
        let page = Page::from_query(&query(&[("count", "2"), ("count", "9")]));
        assert_eq!(page.count, 2);
    }

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("0"), Some(0));
        assert_eq!(parse_product_id("42"), Some(42));
        assert_eq!(parse_product_id("abc"), None);
        assert_eq!(parse_product_id("-1"), None);
        assert_eq!(parse_product_id("+1"), None);
        assert_eq!(parse_product_id("1.5"), None);
        assert_eq!(parse_product_id(""), None);
        assert_eq!(parse_product_id("99999999999"), None);
    }

    #[test]
    fn test_product_decode_is_lenient() {
        let product: Product = serde_json::from_str(r#"{"name":"widget","price":9.99}"#).unwrap();
        assert_eq!(product.id, 0);
        assert_eq!(product.name, "widget");

        let product: Product = serde_json::from_str(r#"{"extra":true}"#).unwrap();
        assert_eq!(product, Product::default());

        assert!(serde_json::from_str::<Product>(r#"{"price":"cheap"}"#).is_err());
    }
}
