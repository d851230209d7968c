// 运费查询数据模型

use serde::{Deserialize, Serialize};

/// 地址坐标点 (区域ID + 经纬度)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationPoint {
    /// 区域ID
    pub area_id: u64,
    /// 纬度
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lat: String,
    /// 经度
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lng: String,
}

impl LocationPoint {
    pub fn area(area_id: u64) -> Self {
        Self {
            area_id,
            ..Default::default()
        }
    }
}

/// 国内运费查询请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRequest {
    /// 发货地
    pub origin: LocationPoint,
    /// 收货地
    pub destination: LocationPoint,
    /// 重量 (kg)
    pub weight: f64,
    /// 高度 (cm)
    pub height: f64,
    /// 宽度 (cm)
    pub width: f64,
    /// 长度 (cm)
    pub length: f64,
    /// 物品价值
    pub item_value: u64,
    /// 是否货到付款
    #[serde(default)]
    pub cod: bool,
    /// 是否用于下单
    #[serde(default)]
    pub for_order: bool,
    /// 排序方式 (如 "price")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort_by: Vec<String>,
}

/// 运费类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Instant,
    Regular,
    Express,
    Trucking,
    Same,
}

impl RateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Instant => "instant",
            RateType::Regular => "regular",
            RateType::Express => "express",
            RateType::Trucking => "trucking",
            RateType::Same => "same",
        }
    }
}
