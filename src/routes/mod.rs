// 路由模块
// 每个子模块包含对应接口的 handler 和请求/响应模型

pub mod crawl;
pub mod settings;
