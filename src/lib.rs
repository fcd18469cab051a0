use config::Config;
use crawler::Crawler;

pub mod cache;
pub mod config;
pub mod crawler;
pub mod error;
pub mod fetcher;
pub mod middleware;
pub mod router;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub crawler: Crawler,
}
