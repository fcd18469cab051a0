use chrono::{DateTime, Duration, Utc};

/// 缓存条目的新鲜期，单位分钟
pub const FRESHNESS_WINDOW_MINUTES: i64 = 60;

/// 单个 URL 对应的缓存页面
#[derive(Debug, Clone)]
pub struct CachedPage {
    /// 页面内容
    pub content: String,
    /// 上次抓取时间
    pub last_crawled: DateTime<Utc>,
    /// 是否由付费请求抓取
    pub paying_access: bool,
}

impl CachedPage {
    pub fn new(content: String, paying_access: bool) -> Self {
        CachedPage {
            content,
            last_crawled: Utc::now(),
            paying_access,
        }
    }

    /// 条目是否仍在新鲜期内
    pub fn is_fresh(&self) -> bool {
        Utc::now() - self.last_crawled < Duration::minutes(FRESHNESS_WINDOW_MINUTES)
    }

    /// 条目能否被该访问等级的请求直接复用
    ///
    /// 免费请求不能复用付费请求抓取的条目，反过来不限
    pub fn is_reusable(&self, paying_customer: bool) -> bool {
        self.is_fresh() && (paying_customer || !self.paying_access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_aged(age_minutes: i64, paying_access: bool) -> CachedPage {
        CachedPage {
            content: "<html></html>".to_string(),
            last_crawled: Utc::now() - Duration::minutes(age_minutes),
            paying_access,
        }
    }

    #[test]
    fn entry_is_fresh_within_window() {
        assert!(page_aged(0, false).is_fresh());
        assert!(page_aged(59, false).is_fresh());
        assert!(!page_aged(60, false).is_fresh());
        assert!(!page_aged(61, false).is_fresh());
    }

    #[test]
    fn non_paying_entry_is_reusable_by_everyone() {
        let page = page_aged(10, false);

        assert!(page.is_reusable(true));
        assert!(page.is_reusable(false));
    }

    #[test]
    fn paying_entry_is_reusable_by_paying_only() {
        let page = page_aged(10, true);

        assert!(page.is_reusable(true));
        assert!(!page.is_reusable(false));
    }

    #[test]
    fn stale_entry_is_never_reusable() {
        let page = page_aged(61, false);

        assert!(!page.is_reusable(true));
        assert!(!page.is_reusable(false));
    }
}
