// 页面抓取模块
// 只负责单次抓取，重试由上层协调器决定

use std::fmt;

use async_trait::async_trait;

/// 抓取过程中的传输层错误
#[derive(Debug, Clone)]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        FetchError {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::new(err.to_string())
    }
}

/// 单次页面抓取的抽象，测试里换成桩实现
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取一次页面，内部不重试，也不区分状态码
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// 基于 reqwest 的真实抓取器
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // 非 2xx 的响应体一样返回，和成功路径保持一致
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;
        Ok(body)
    }
}
