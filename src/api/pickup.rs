// 取件接口

use serde_json::Value;
use crate::api::{ApiHandler, ShipperApi};
use crate::error::Result;
use crate::models::{PickupCancelRequest, PickupRequest, PickupTimeslot, ShipperResponse};
use crate::shipper::Shipper;

/// 取件处理器
#[derive(Debug, Clone)]
pub struct Pickup {
    shipper: Shipper,
}

impl ShipperApi for Pickup {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn shipper(&self) -> &Shipper {
        &self.shipper
    }
}

impl ApiHandler for Pickup {
    const NAME: &'static str = "pickup";

    fn new(shipper: Shipper) -> Self {
        Self { shipper }
    }
}

impl Pickup {
    /// 按时间段为订单预约取件
    ///
    /// # Arguments
    /// * `order_ids` - Shipper订单ID列表
    /// * `timeslot` - 取件时间段 (来自 `timeslots`)
    pub async fn create(
        &self,
        order_ids: &[&str],
        timeslot: PickupTimeslot,
    ) -> Result<ShipperResponse<Value>> {
        let request = PickupRequest::new(
            order_ids.iter().map(|id| id.to_string()).collect(),
            timeslot,
        );

        self.shipper
            .http_client()?
            .post_json("/v3/pickup/timeslot", &request)
            .await
    }

    /// 取消取件
    pub async fn cancel(&self, pickup_code: &str) -> Result<ShipperResponse<Value>> {
        let request = PickupCancelRequest {
            pickup_code: pickup_code.to_string(),
        };

        self.shipper
            .http_client()?
            .patch_json("/v3/pickup/cancel", &request)
            .await
    }

    /// 可预约的取件时间段
    ///
    /// # Arguments
    /// * `time_zone` - 时区，如 `Asia/Jakarta`
    pub async fn timeslots(&self, time_zone: &str) -> Result<ShipperResponse<Value>> {
        self.shipper
            .http_client()?
            .get_json_with_query("/v3/pickup/timeslot", &[("time_zone", time_zone)])
            .await
    }
}
