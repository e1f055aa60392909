//! 核心响应处理模块

use serde::Serialize;

/// 无数据返回时的结果体，例如删除成功后的 `{"result":"success"}`
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
