// 地址查询接口
// 国家、省、市、区、片区逐级查询与关键字搜索

use serde_json::Value;
use crate::api::{ApiHandler, ShipperApi};
use crate::error::Result;
use crate::models::ShipperResponse;
use crate::shipper::Shipper;

/// 地址查询处理器
#[derive(Debug, Clone)]
pub struct Location {
    shipper: Shipper,
}

impl ShipperApi for Location {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn shipper(&self) -> &Shipper {
        &self.shipper
    }
}

impl ApiHandler for Location {
    const NAME: &'static str = "location";

    fn new(shipper: Shipper) -> Self {
        Self { shipper }
    }
}

impl Location {
    /// 国家列表
    pub async fn countries(&self) -> Result<ShipperResponse<Value>> {
        self.get("/v3/location/countries").await
    }

    /// 指定国家下的省份
    pub async fn provinces(&self, country_id: u64) -> Result<ShipperResponse<Value>> {
        self.get(&format!("/v3/location/country/{}/provinces", country_id)).await
    }

    /// 指定省份下的城市
    pub async fn cities(&self, province_id: u64) -> Result<ShipperResponse<Value>> {
        self.get(&format!("/v3/location/province/{}/cities", province_id)).await
    }

    /// 指定城市下的区
    pub async fn suburbs(&self, city_id: u64) -> Result<ShipperResponse<Value>> {
        self.get(&format!("/v3/location/city/{}/suburbs", city_id)).await
    }

    /// 指定区下的片区
    pub async fn areas(&self, suburb_id: u64) -> Result<ShipperResponse<Value>> {
        self.get(&format!("/v3/location/suburb/{}/areas", suburb_id)).await
    }

    /// 按关键字搜索地址
    ///
    /// # Arguments
    /// * `keyword` - 搜索关键字
    /// * `adm_level` - 行政级别 (2: 省 ... 5: 片区)
    pub async fn search(&self, keyword: &str, adm_level: u8) -> Result<ShipperResponse<Value>> {
        let adm_level = adm_level.to_string();
        self.shipper
            .http_client()?
            .get_json_with_query("/v3/location", &[("adm_level", adm_level.as_str()), ("keyword", keyword)])
            .await
    }

    async fn get(&self, path: &str) -> Result<ShipperResponse<Value>> {
        self.shipper.http_client()?.get_json(path).await
    }
}
