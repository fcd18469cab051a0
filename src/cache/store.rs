use std::sync::Arc;

use dashmap::DashMap;

use super::models::CachedPage;

/// 过期条目的清理间隔，单位秒
pub const SWEEP_INTERVAL_SECS: u64 = 600;

/// 进程内页面缓存
///
/// 读写只在分片锁内完成，网络抓取一律发生在锁外。
/// 条目总数超过上限时先清过期条目，再按抓取时间淘汰最旧的。
#[derive(Debug, Clone)]
pub struct PageCache {
    entries: Arc<DashMap<String, CachedPage>>,
    max_entries: usize,
}

impl PageCache {
    pub fn new(max_entries: usize) -> Self {
        PageCache {
            entries: Arc::new(DashMap::new()),
            max_entries,
        }
    }

    /// 取条目的克隆，不考虑新鲜度和访问等级
    pub fn get(&self, url: &str) -> Option<CachedPage> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    /// 取可以被该访问等级复用的内容
    pub fn lookup(&self, url: &str, paying_customer: bool) -> Option<String> {
        self.entries
            .get(url)
            .filter(|entry| entry.value().is_reusable(paying_customer))
            .map(|entry| entry.value().content.clone())
    }

    /// 整体写入条目，同一 URL 直接覆盖
    pub fn put(&self, url: &str, page: CachedPage) {
        self.entries.insert(url.to_string(), page);

        if self.entries.len() > self.max_entries {
            self.remove_expired();
        }
        while self.entries.len() > self.max_entries {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().last_crawled)
                .map(|entry| entry.key().clone());
            match oldest {
                Some(url) => {
                    self.entries.remove(&url);
                }
                None => break,
            }
        }
    }

    /// 清掉过期条目，返回清理数量
    pub fn remove_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, page| page.is_fresh());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
