// Shipper 商户API客户端
// 选择沙箱/生产环境、注入API密钥请求头，并按资源名称解析接口处理器

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod shipper;
pub mod utils;

pub use api::{ApiFactory, ApiHandler, ApiRegistry, ShipperApi};
pub use config::{ShipperConfig, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use error::{Result, ShipperError};
pub use http::HttpClient;
pub use shipper::Shipper;
