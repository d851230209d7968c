// HTTP客户端
// 所有请求自动携带X-API-Key与Accept头，路径相对于当前API地址

use std::time::Duration;
use reqwest::{Client, Method, RequestBuilder, header::{HeaderMap, HeaderValue, ACCEPT}};
use serde::{de::DeserializeOwned, Serialize};
use crate::error::{Result, ShipperError};
use crate::utils::{validate_api_key, validate_api_url};

/// API密钥请求头
pub const API_KEY_HEADER: &str = "X-API-Key";

/// 绑定了API密钥与基础地址的HTTP客户端
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    /// 创建HTTP客户端
    ///
    /// # Arguments
    /// * `base_url` - API基础地址
    /// * `api_key` - API密钥
    /// * `timeout` - 请求超时时间 (秒)
    /// * `user_agent` - User-Agent
    ///
    /// # Returns
    /// * HTTP客户端实例
    pub fn new(base_url: &str, api_key: &str, timeout: u64, user_agent: &str) -> Result<Self> {
        validate_api_url(base_url)?;
        validate_api_key(api_key)?;

        if timeout == 0 {
            return Err(ShipperError::InvalidConfig("request timeout cannot be 0".to_string()));
        }

        // 构建默认请求头
        let mut key_value = HeaderValue::from_str(api_key)
            .map_err(|e| ShipperError::InvalidHeader(e.to_string()))?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// 拼接完整请求地址，绝对地址原样返回
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("Shipper request: {} {}", method, url);
        self.client.request(method, url)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// 发送请求并解析JSON响应
    ///
    /// 非2xx状态码返回 `ShipperError::Api`，携带状态码和响应体
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("Shipper API responded with {}: {}", status, body);
            return Err(ShipperError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(self.get(path)).await
    }

    /// 带查询参数的GET请求
    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.get(path).query(query)).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.post(path).json(body)).await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.put(path).json(body)).await
    }

    pub async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.patch(path).json(body)).await
    }

    pub async fn delete_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.delete(path).json(body)).await
    }
}
