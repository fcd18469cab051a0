use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use crawlcache::{
    AppState,
    cache::{PageCache, SWEEP_INTERVAL_SECS},
    config::{Config, ThreadBudget},
    crawler::Crawler,
    fetcher::HttpFetcher,
    router::create_router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env();

    // 组装缓存、抓取器和协调器
    let cache = PageCache::new(config.cache_max_entries);
    let budget = Arc::new(ThreadBudget::new(
        config.paying_workers,
        config.non_paying_workers,
    ));
    let crawler = Crawler::new(cache.clone(), Arc::new(HttpFetcher::new()), budget);

    // 定期清理过期的缓存条目
    let sweeper_cache = cache.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
        loop {
            ticker.tick().await;
            let removed = sweeper_cache.remove_expired();
            if removed > 0 {
                tracing::debug!("Removed {} expired cache entries", removed);
            }
        }
    });

    let state = AppState {
        config: config.clone(),
        crawler,
    };
    let app = create_router(state.clone());

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
