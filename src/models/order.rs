// 订单数据模型
// 定义下单、取消订单、打印面单相关的请求结构

use serde::{Deserialize, Serialize};
use super::pricing::LocationPoint;

/// 收件人
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consignee {
    pub name: String,
    pub phone_number: String,
}

/// 寄件人
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consigner {
    pub name: String,
    pub phone_number: String,
}

/// 订单地址
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderAddress {
    /// 详细地址
    pub address: String,
    /// 区域ID
    pub area_id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lat: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lng: String,
}

impl From<(String, LocationPoint)> for OrderAddress {
    fn from((address, point): (String, LocationPoint)) -> Self {
        Self {
            address,
            area_id: point.area_id,
            lat: point.lat,
            lng: point.lng,
        }
    }
}

/// 保价与货到付款设置
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderCoverage {
    /// 保价类型
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<bool>,
    /// 货到付款金额
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_amount: Option<u64>,
}

/// 承运商选择 (来自运费查询结果)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderCourier {
    pub rate_id: u64,
    /// 是否使用保险
    #[serde(default)]
    pub use_insurance: bool,
    /// 是否货到付款
    #[serde(default)]
    pub cod: bool,
}

/// 包裹中的物品
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub price: u64,
    pub qty: u32,
}

/// 包裹信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPackage {
    pub weight: f64,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub price: u64,
    /// 包裹类型 (1: 文件, 2: 小包裹, 3: 大包裹)
    pub package_type: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
}

/// 创建订单请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// 商户系统订单号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub consignee: Consignee,
    pub consigner: Consigner,
    pub origin: OrderAddress,
    pub destination: OrderAddress,
    pub courier: OrderCourier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<OrderCoverage>,
    pub package: OrderPackage,
    /// 支付方式 (如 "postpay")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
}

/// 取消请求 (订单与取件共用)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CancelRequest {
    /// 取消原因
    pub reason: String,
}

/// 打印面单请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelRequest {
    pub id: Vec<String>,
}
