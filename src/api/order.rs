// 订单接口
// 下单、查询、取消订单与打印面单

use serde_json::Value;
use crate::api::{ApiHandler, ShipperApi};
use crate::error::Result;
use crate::models::{CancelRequest, LabelRequest, OrderRequest, ShipperResponse};
use crate::shipper::Shipper;

/// 订单处理器
#[derive(Debug, Clone)]
pub struct Order {
    shipper: Shipper,
}

impl ShipperApi for Order {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn shipper(&self) -> &Shipper {
        &self.shipper
    }
}

impl ApiHandler for Order {
    const NAME: &'static str = "order";

    fn new(shipper: Shipper) -> Self {
        Self { shipper }
    }
}

impl Order {
    /// 创建订单
    pub async fn create(&self, request: &OrderRequest) -> Result<ShipperResponse<Value>> {
        self.shipper.http_client()?.post_json("/v3/order", request).await
    }

    /// 订单详情
    pub async fn detail(&self, order_id: &str) -> Result<ShipperResponse<Value>> {
        self.shipper
            .http_client()?
            .get_json(&format!("/v3/order/{}", order_id))
            .await
    }

    /// 取消订单
    ///
    /// # Arguments
    /// * `order_id` - Shipper订单ID
    /// * `reason` - 取消原因
    pub async fn cancel(&self, order_id: &str, reason: &str) -> Result<ShipperResponse<Value>> {
        let request = CancelRequest {
            reason: reason.to_string(),
        };

        self.shipper
            .http_client()?
            .delete_json(&format!("/v3/order/{}", order_id), &request)
            .await
    }

    /// 生成订单面单
    pub async fn label(&self, order_ids: &[&str]) -> Result<ShipperResponse<Value>> {
        let request = LabelRequest {
            id: order_ids.iter().map(|id| id.to_string()).collect(),
        };

        self.shipper.http_client()?.post_json("/v3/order/label", &request).await
    }
}
