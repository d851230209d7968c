// Shipper客户端
// 持有API密钥与当前API地址，负责构建HTTP客户端并按名称解析接口处理器

use std::sync::Arc;
use crate::api::{ApiHandler, ApiRegistry, AsAny, Location, Logistic, Order, Pickup, Pricing, ShipperApi, handler_name};
use crate::config::{ShipperConfig, PRODUCTION_API_URL, SANDBOX_API_URL};
use crate::error::{Result, ShipperError};
use crate::http::HttpClient;

/// Shipper商户API客户端
#[derive(Debug, Clone)]
pub struct Shipper {
    api_key: Option<String>,
    api_url: String,
    config: ShipperConfig,
    registry: Arc<ApiRegistry>,
}

impl Shipper {
    /// 创建新的Shipper客户端
    ///
    /// 未提供 (或为空) 的参数使用配置中的默认值
    ///
    /// # Arguments
    /// * `config` - 外部配置
    /// * `api_key` - API密钥
    /// * `api_url` - API地址
    ///
    /// # Returns
    /// * Shipper客户端实例
    pub fn new(config: ShipperConfig, api_key: Option<&str>, api_url: Option<&str>) -> Self {
        let mut shipper = Self {
            api_key: None,
            api_url: config.default_api_url().to_string(),
            config,
            registry: Arc::new(ApiRegistry::default()),
        };
        shipper.set_api_key(api_key).set_api_url(api_url);
        shipper
    }

    /// 完全使用配置中的默认值
    pub fn from_config(config: ShipperConfig) -> Self {
        Self::new(config, None, None)
    }

    /// 从环境变量加载配置并创建客户端
    pub fn make(api_key: Option<&str>, api_url: Option<&str>) -> anyhow::Result<Self> {
        let config = ShipperConfig::from_env()?;
        config.validate()?;
        Ok(Self::new(config, api_key, api_url))
    }

    /// 替换接口处理器注册表
    pub fn with_registry(mut self, registry: ApiRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn config(&self) -> &ShipperConfig {
        &self.config
    }

    pub fn registry(&self) -> &ApiRegistry {
        &self.registry
    }

    /// 设置API密钥，未提供时使用配置中的密钥
    pub fn set_api_key(&mut self, api_key: Option<&str>) -> &mut Self {
        self.api_key = match api_key.filter(|key| !key.is_empty()) {
            Some(key) => Some(key.to_string()),
            None => self.config.api_key.clone(),
        };
        self
    }

    /// 设置API地址，未提供时按沙箱开关选择环境
    pub fn set_api_url(&mut self, api_url: Option<&str>) -> &mut Self {
        if let Some(url) = api_url.filter(|url| !url.is_empty()) {
            self.api_url = url.to_string();
            return self;
        }

        if self.config.sandbox {
            self.use_sandbox()
        } else {
            self.use_production()
        }
    }

    pub fn use_sandbox(&mut self) -> &mut Self {
        self.api_url = SANDBOX_API_URL.to_string();
        self
    }

    pub fn use_production(&mut self) -> &mut Self {
        self.api_url = PRODUCTION_API_URL.to_string();
        self
    }

    pub fn is_sandbox(&self) -> bool {
        self.api_url == SANDBOX_API_URL
    }

    /// 获取携带API密钥与API地址的HTTP客户端
    pub fn http_client(&self) -> Result<HttpClient> {
        let api_key = self.api_key().ok_or(ShipperError::MissingApiKey)?;

        HttpClient::new(&self.api_url, api_key, self.config.timeout, &self.config.user_agent)
    }

    /// 按名称解析接口处理器
    ///
    /// # Arguments
    /// * `name` - 资源名称，如 `location`、`order`
    ///
    /// # Returns
    /// * 以当前客户端构造的处理器
    pub fn api(&self, name: &str) -> Result<Box<dyn ShipperApi>> {
        self.registry.resolve(name, self.clone())
    }

    /// 按名称解析并转换为具体处理器类型
    pub fn api_as<T: ShipperApi>(&self, name: &str) -> Result<T> {
        self.api(name)?
            .into_any()
            .downcast::<T>()
            .map(|api| *api)
            .map_err(|_| ShipperError::HandlerTypeMismatch {
                name: handler_name(name),
                expected: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn location(&self) -> Location {
        Location::new(self.clone())
    }

    pub fn logistic(&self) -> Logistic {
        Logistic::new(self.clone())
    }

    pub fn order(&self) -> Order {
        Order::new(self.clone())
    }

    pub fn pickup(&self) -> Pickup {
        Pickup::new(self.clone())
    }

    pub fn pricing(&self) -> Pricing {
        Pricing::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(api_key: Option<&str>, sandbox: bool) -> ShipperConfig {
        ShipperConfig {
            api_key: api_key.map(str::to_string),
            sandbox,
            ..ShipperConfig::default()
        }
    }

    #[test]
    fn test_default_api_key_from_config() {
        let shipper = Shipper::new(config(Some("configured-key"), false), None, None);
        assert_eq!(shipper.api_key(), Some("configured-key"));

        let shipper = Shipper::new(config(Some("configured-key"), false), Some(""), None);
        assert_eq!(shipper.api_key(), Some("configured-key"));
    }

    #[test]
    fn test_default_api_url_follows_sandbox_flag() {
        let sandbox = Shipper::from_config(config(None, true));
        assert_eq!(sandbox.api_url(), SANDBOX_API_URL);
        assert!(sandbox.is_sandbox());

        let production = Shipper::from_config(config(None, false));
        assert_eq!(production.api_url(), PRODUCTION_API_URL);
        assert!(!production.is_sandbox());
    }

    #[test]
    fn test_explicit_arguments_override_config() {
        let shipper = Shipper::new(
            config(Some("configured-key"), true),
            Some("explicit-key"),
            Some("http://localhost:9000"),
        );

        assert_eq!(shipper.api_key(), Some("explicit-key"));
        assert_eq!(shipper.api_url(), "http://localhost:9000");
    }

    #[test]
    fn test_setters_and_environment_toggles() {
        let mut shipper = Shipper::from_config(config(Some("configured-key"), true));

        shipper.use_production();
        assert_eq!(shipper.api_url(), PRODUCTION_API_URL);

        shipper.use_sandbox().set_api_key(Some("other-key"));
        assert_eq!(shipper.api_url(), SANDBOX_API_URL);
        assert_eq!(shipper.api_key(), Some("other-key"));

        // 清空后回到配置默认值
        shipper.set_api_url(Some("http://localhost:9000")).set_api_url(None).set_api_key(None);
        assert_eq!(shipper.api_url(), SANDBOX_API_URL);
        assert_eq!(shipper.api_key(), Some("configured-key"));
    }

    #[test]
    fn test_unknown_api_fails_with_expected_name() {
        let shipper = Shipper::from_config(config(Some("k"), false));

        match shipper.api("warehouse") {
            Err(ShipperError::ApiNotFound(name)) => assert_eq!(name, "shipper::api::warehouse::Warehouse"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("warehouse should not resolve"),
        }
    }

    #[test]
    fn test_api_as_downcasts_to_handler() {
        let shipper = Shipper::from_config(config(Some("k"), false));

        let location: Location = shipper.api_as("Location").unwrap();
        assert_eq!(location.shipper().api_key(), Some("k"));

        match shipper.api_as::<Order>("location") {
            Err(ShipperError::HandlerTypeMismatch { name, expected }) => {
                assert_eq!(name, "shipper::api::location::Location");
                assert!(expected.ends_with("order::Order"));
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("location should not downcast to Order"),
        }
        assert!(matches!(shipper.api_as::<Order>("warehouse"), Err(ShipperError::ApiNotFound(_))));
    }

    #[test]
    fn test_zero_timeout_is_rejected_when_building_client() {
        let config = ShipperConfig {
            api_key: Some("k".to_string()),
            timeout: 0,
            ..ShipperConfig::default()
        };

        let shipper = Shipper::from_config(config.clone());
        assert!(matches!(shipper.http_client(), Err(ShipperError::InvalidConfig(_))));

        let shipper = Shipper::new(config, None, Some("http://127.0.0.1:9000"));
        assert!(matches!(shipper.http_client(), Err(ShipperError::InvalidConfig(_))));
    }

    #[test]
    fn test_with_registry_limits_lookup() {
        let mut registry = ApiRegistry::new();
        registry.register_handler::<Logistic>();
        let shipper = Shipper::from_config(config(Some("k"), false)).with_registry(registry);

        assert!(shipper.api("logistic").is_ok());
        assert!(shipper.api("order").is_err());
        // 类型化访问不依赖注册表
        assert_eq!(shipper.order().name(), "order");
    }

    #[test]
    fn test_http_client_requires_api_key() {
        let shipper = Shipper::from_config(config(None, false));
        assert!(matches!(shipper.http_client(), Err(ShipperError::MissingApiKey)));
    }

    #[test]
    fn test_http_client_uses_configured_url_and_key() {
        let shipper = Shipper::new(config(None, true), Some("explicit-key"), None);
        let client = shipper.http_client().unwrap();

        assert_eq!(client.base_url(), SANDBOX_API_URL);
        assert_eq!(client.api_key(), "explicit-key");
    }

    #[tokio::test]
    async fn test_http_client_sends_key_header_to_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/logistic"))
            .and(header("X-API-Key", "explicit-key"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let shipper = Shipper::new(config(None, false), Some("explicit-key"), Some(&server.uri()));
        let value: Value = shipper.http_client().unwrap().get_json("/v3/logistic").await.unwrap();

        assert_eq!(value["ok"], true);
    }
}
