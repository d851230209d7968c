// 运费查询接口

use serde_json::Value;
use crate::api::{ApiHandler, ShipperApi};
use crate::error::Result;
use crate::models::{PricingRequest, RateType, ShipperResponse};
use crate::shipper::Shipper;

/// 运费查询处理器
#[derive(Debug, Clone)]
pub struct Pricing {
    shipper: Shipper,
}

impl ShipperApi for Pricing {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn shipper(&self) -> &Shipper {
        &self.shipper
    }
}

impl ApiHandler for Pricing {
    const NAME: &'static str = "pricing";

    fn new(shipper: Shipper) -> Self {
        Self { shipper }
    }
}

impl Pricing {
    /// 查询所有运费类型的国内运费
    pub async fn domestic(&self, request: &PricingRequest) -> Result<ShipperResponse<Value>> {
        self.shipper
            .http_client()?
            .post_json("/v3/pricing/domestic", request)
            .await
    }

    /// 查询指定运费类型的国内运费
    pub async fn domestic_by_rate(
        &self,
        rate_type: RateType,
        request: &PricingRequest,
    ) -> Result<ShipperResponse<Value>> {
        self.shipper
            .http_client()?
            .post_json(&format!("/v3/pricing/domestic/{}", rate_type.as_str()), request)
            .await
    }
}
