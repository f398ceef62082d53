//! 基础设施层：HTTP 访问和日志

pub mod http;
pub mod logger;
