use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};

// 抓取次数预算的默认值
const DEFAULT_PAYING_WORKERS: usize = 5; // 付费请求
const DEFAULT_NON_PAYING_WORKERS: usize = 2; // 免费请求

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub paying_workers: usize,
    pub non_paying_workers: usize,
    pub cache_max_entries: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "::".to_string()),
            server_port: parse_var("PORT").unwrap_or(8000),
            paying_workers: parse_var("PAYING_WORKERS")
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_PAYING_WORKERS),
            non_paying_workers: parse_var("NON_PAYING_WORKERS")
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_NON_PAYING_WORKERS),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .filter(|n| *n > 0)
                .unwrap_or(4096),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// 每个请求可用的抓取次数预算，按付费/免费分级
///
/// 运行期可以通过 /set 接口调整。读写都是原子操作，
/// 并发修改时请求读到近似值即可。
#[derive(Debug)]
pub struct ThreadBudget {
    paying: AtomicUsize,
    non_paying: AtomicUsize,
}

impl ThreadBudget {
    pub fn new(paying: usize, non_paying: usize) -> Self {
        ThreadBudget {
            paying: AtomicUsize::new(paying),
            non_paying: AtomicUsize::new(non_paying),
        }
    }

    /// 更新预算，缺失或非正数的值一律忽略，保留原值
    pub fn configure(&self, paying: Option<i64>, non_paying: Option<i64>) {
        if let Some(n) = paying {
            if n > 0 {
                self.paying.store(n as usize, Ordering::Relaxed);
            }
        }
        if let Some(n) = non_paying {
            if n > 0 {
                self.non_paying.store(n as usize, Ordering::Relaxed);
            }
        }
    }

    pub fn attempts_for(&self, paying_customer: bool) -> usize {
        if paying_customer {
            self.paying.load(Ordering::Relaxed)
        } else {
            self.non_paying.load(Ordering::Relaxed)
        }
    }

    /// 当前预算快照 (付费, 免费)
    pub fn snapshot(&self) -> (usize, usize) {
        (
            self.paying.load(Ordering::Relaxed),
            self.non_paying.load(Ordering::Relaxed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_updates_only_positive_values() {
        let budget = ThreadBudget::new(5, 2);

        budget.configure(Some(3), Some(-1));

        assert_eq!(budget.snapshot(), (3, 2));
    }

    #[test]
    fn configure_ignores_missing_values() {
        let budget = ThreadBudget::new(5, 2);

        budget.configure(None, Some(7));

        assert_eq!(budget.snapshot(), (5, 7));
    }

    #[test]
    fn configure_ignores_zero() {
        let budget = ThreadBudget::new(5, 2);

        budget.configure(Some(0), Some(0));

        assert_eq!(budget.snapshot(), (5, 2));
    }

    #[test]
    fn attempts_follow_access_class() {
        let budget = ThreadBudget::new(5, 2);

        assert_eq!(budget.attempts_for(true), 5);
        assert_eq!(budget.attempts_for(false), 2);
    }
}
