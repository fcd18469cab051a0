use serde::{Deserialize, Serialize};

/// /set 接口的查询参数，先原样接收字符串再宽松解析
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsParams {
    pub paying: Option<String>,
    #[serde(rename = "non-paying")]
    pub non_paying: Option<String>,
}

impl UpdateSettingsParams {
    /// 解析失败按缺失处理，非正数由预算层过滤
    pub fn paying_value(&self) -> Option<i64> {
        self.paying.as_deref().and_then(|v| v.parse().ok())
    }

    pub fn non_paying_value(&self) -> Option<i64> {
        self.non_paying.as_deref().and_then(|v| v.parse().ok())
    }
}

/// 当前线程预算
#[derive(Debug, Serialize)]
pub struct ThreadSettingsResponse {
    /// 付费请求的抓取次数
    pub paying: usize,
    /// 免费请求的抓取次数
    #[serde(rename = "non-paying")]
    pub non_paying: usize,
}
