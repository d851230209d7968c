// 物流商接口

use serde_json::Value;
use crate::api::{ApiHandler, ShipperApi};
use crate::error::Result;
use crate::models::ShipperResponse;
use crate::shipper::Shipper;

/// 物流商处理器
#[derive(Debug, Clone)]
pub struct Logistic {
    shipper: Shipper,
}

impl ShipperApi for Logistic {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn shipper(&self) -> &Shipper {
        &self.shipper
    }
}

impl ApiHandler for Logistic {
    const NAME: &'static str = "logistic";

    fn new(shipper: Shipper) -> Self {
        Self { shipper }
    }
}

impl Logistic {
    /// 可用物流商列表
    pub async fn list(&self) -> Result<ShipperResponse<Value>> {
        self.shipper.http_client()?.get_json("/v3/logistic").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShipperConfig;
    use crate::error::ShipperError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/logistic"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "metadata": {"http_status_code": 200, "http_status": "OK"},
                "data": [{"id": 4, "name": "JNE"}]
            })))
            .mount(&server)
            .await;

        let shipper = Shipper::new(ShipperConfig::default(), Some("k"), Some(&server.uri()));
        let response = shipper.logistic().list().await.unwrap();

        assert_eq!(response.data[0]["name"], "JNE");
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let shipper = Shipper::new(ShipperConfig::default(), Some("bad"), Some(&server.uri()));
        let result = shipper.logistic().list().await;

        assert!(matches!(result, Err(ShipperError::Api { status: 401, .. })));
    }
}
