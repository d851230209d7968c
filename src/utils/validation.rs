// 数据验证工具函数
// 构建HTTP客户端前检查API地址和API密钥

use reqwest::Url;
use crate::error::{Result, ShipperError};

/// 验证并解析API地址
///
/// # Arguments
/// * `url` - API基础地址
///
/// # Returns
/// * 解析后的URL
pub fn validate_api_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ShipperError::InvalidUrl(format!("{}: {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ShipperError::InvalidUrl(format!(
            "{}: unsupported scheme {}",
            url,
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ShipperError::InvalidUrl(format!("{}: missing host", url)));
    }

    Ok(parsed)
}

/// 验证API密钥非空，请求头字符由 `HeaderValue` 检查
pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        return Err(ShipperError::MissingApiKey);
    }

    Ok(())
}
