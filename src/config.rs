// 配置管理模块
// 负责加载Shipper客户端的外部配置 (API密钥、沙箱开关等)

use serde::{Deserialize, Serialize};
use std::env;
use anyhow::{Result, Context};

/// 沙箱环境API地址
pub const SANDBOX_API_URL: &str = "https://merchant-api-sandbox.shipper.id";
/// 生产环境API地址
pub const PRODUCTION_API_URL: &str = "https://merchant-api.shipper.id";

/// Shipper客户端配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipperConfig {
    /// 默认API密钥
    pub api_key: Option<String>,
    /// 是否使用沙箱环境
    pub sandbox: bool,
    /// 请求超时时间 (秒)
    pub timeout: u64,
    /// 请求User-Agent
    pub user_agent: String,
}

impl ShipperConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // 加载.env文件，忽略错误

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过自定义查找函数加载配置
    ///
    /// # Arguments
    /// * `lookup` - 按变量名返回配置值
    ///
    /// # Returns
    /// * 客户端配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(ShipperConfig {
            api_key: lookup("SHIPPER_API_KEY").filter(|key| !key.is_empty()),
            sandbox: match lookup("SHIPPER_SANDBOX") {
                Some(value) => parse_bool(&value)
                    .with_context(|| format!("Invalid SHIPPER_SANDBOX: {}", value))?,
                None => defaults.sandbox,
            },
            timeout: match lookup("SHIPPER_TIMEOUT") {
                Some(value) => value.trim().parse().context("Invalid SHIPPER_TIMEOUT")?,
                None => defaults.timeout,
            },
            user_agent: lookup("SHIPPER_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.timeout == 0 {
            anyhow::bail!("Request timeout cannot be 0");
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("User agent cannot be empty");
        }

        Ok(())
    }

    /// 当前环境对应的默认API地址
    pub fn default_api_url(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_API_URL
        } else {
            PRODUCTION_API_URL
        }
    }
}

impl Default for ShipperConfig {
    fn default() -> Self {
        ShipperConfig {
            api_key: None,
            sandbox: false,
            timeout: 30,
            user_agent: format!("shipper-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}
