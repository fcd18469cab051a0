use serde::Deserialize;

/// /crawl 接口的查询参数
#[derive(Debug, Deserialize)]
pub struct CrawlParams {
    /// 要抓取的页面地址
    pub url: Option<String>,
    /// 为 "true" 时按付费客户处理
    pub paying_customer: Option<String>,
}

impl CrawlParams {
    pub fn is_paying_customer(&self) -> bool {
        self.paying_customer.as_deref() == Some("true")
    }
}
