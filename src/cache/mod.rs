// 缓存模块
// 包含缓存条目结构和进程内缓存存储

pub mod models;
pub mod store;

// 重新导出常用类型，方便其他模块使用
pub use models::{CachedPage, FRESHNESS_WINDOW_MINUTES};
pub use store::{PageCache, SWEEP_INTERVAL_SECS};
