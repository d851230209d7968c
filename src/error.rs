// 错误类型定义
// Shipper客户端构建、接口解析与请求过程中的错误

/// Shipper客户端错误
#[derive(Debug, thiserror::Error)]
pub enum ShipperError {
    /// 按名称解析接口处理器失败
    #[error("API handler {0} not found")]
    ApiNotFound(String),

    /// 处理器已注册，但类型与请求的不一致
    #[error("API handler {name} is not a {expected}")]
    HandlerTypeMismatch { name: String, expected: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Shipper API key is not configured")]
    MissingApiKey,

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// 接口返回非2xx状态码
    #[error("Shipper API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShipperError>;
