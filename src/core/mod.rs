//! 核心层：错误映射、中间件、响应体

pub mod error;
pub mod middleware;
pub mod response;
