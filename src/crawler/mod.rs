// 抓取协调模块
// 负责缓存复用判断、同 URL 并发去重和带退避的重试

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::cache::{CachedPage, PageCache};
use crate::config::ThreadBudget;
use crate::fetcher::PageFetcher;

const RETRY_BACKOFF_MS: u64 = 100; // 重试退避基数，单位毫秒
const MAX_BACKOFF_SHIFT: usize = 6; // 退避指数上限，防止位移溢出

/// resolve 的失败情形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlError {
    /// 所有抓取尝试都失败，且缓存里没有任何内容
    NotCached,
}

impl fmt::Display for CrawlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlError::NotCached => write!(f, "page is not cached and could not be fetched"),
        }
    }
}

impl std::error::Error for CrawlError {}

/// 页面抓取协调器
///
/// 缓存、抓取器和预算都在构造时注入。
/// 同一 URL 的并发请求共享一次抓取，不同 URL 互不阻塞。
#[derive(Clone)]
pub struct Crawler {
    cache: PageCache,
    fetcher: Arc<dyn PageFetcher>,
    budget: Arc<ThreadBudget>,
    flights: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl Crawler {
    pub fn new(cache: PageCache, fetcher: Arc<dyn PageFetcher>, budget: Arc<ThreadBudget>) -> Self {
        Crawler {
            cache,
            fetcher,
            budget,
            flights: Arc::new(DashMap::new()),
        }
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// 更新抓取次数预算，规则同 ThreadBudget::configure
    pub fn configure(&self, paying: Option<i64>, non_paying: Option<i64>) {
        self.budget.configure(paying, non_paying);
    }

    /// 当前预算快照 (付费, 免费)
    pub fn current_config(&self) -> (usize, usize) {
        self.budget.snapshot()
    }

    /// 解析一个 URL：优先复用缓存，必要时抓取并写回
    ///
    /// 全部抓取失败时退回缓存里的旧内容，连旧内容都没有才报 NotCached
    pub async fn resolve(&self, url: &str, paying_customer: bool) -> Result<String, CrawlError> {
        if let Some(content) = self.cache.lookup(url, paying_customer) {
            debug!("Cache hit for {} (paying_customer: {})", url, paying_customer);
            return Ok(content);
        }

        // 同一 URL 只放一个请求去抓，其余请求在门闩上等结果
        let gate = self.flights.entry(url.to_string()).or_default().clone();

        let fetched = {
            let _guard = gate.lock().await;

            // 等锁期间可能已有请求抓完并写回，先复查
            match self.cache.lookup(url, paying_customer) {
                Some(content) => Some(content),
                None => {
                    let attempts = self.budget.attempts_for(paying_customer);
                    let content = self.fetch_with_retries(url, attempts).await;
                    if let Some(content) = &content {
                        self.cache
                            .put(url, CachedPage::new(content.clone(), paying_customer));
                    }
                    content
                }
            }
        };
        self.flights.remove(url);

        match fetched {
            Some(content) => Ok(content),
            // 抓取全失败时，缓存里残留的旧条目仍然可以兜底
            None => self
                .cache
                .get(url)
                .map(|page| page.content)
                .ok_or(CrawlError::NotCached),
        }
    }

    async fn fetch_with_retries(&self, url: &str, attempts: usize) -> Option<String> {
        for attempt in 1..=attempts {
            match self.fetcher.fetch(url).await {
                Ok(content) => {
                    debug!("Fetched {} on attempt {}/{}", url, attempt, attempts);
                    return Some(content);
                }
                Err(e) => {
                    error!(
                        "Error crawling page {}: {} (attempt {}/{})",
                        url, e, attempt, attempts
                    );
                    if attempt < attempts {
                        let shift = (attempt - 1).min(MAX_BACKOFF_SHIFT);
                        tokio::time::sleep(Duration::from_millis(RETRY_BACKOFF_MS << shift)).await;
                    }
                }
            }
        }
        None
    }
}
