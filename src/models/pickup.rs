// 取件数据模型

use serde::{Deserialize, Serialize};

/// 取件时间段
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupTimeslot {
    pub start_time: String,
    pub end_time: String,
}

/// 创建取件请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupRequest {
    /// 订单ID与取件时间
    pub data_request: PickupDataRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupDataRequest {
    pub order_activation: PickupOrderActivation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupOrderActivation {
    pub order_id: Vec<String>,
    #[serde(flatten)]
    pub timeslot: PickupTimeslot,
}

impl PickupRequest {
    /// 为一组订单创建取件请求
    pub fn new(order_ids: Vec<String>, timeslot: PickupTimeslot) -> Self {
        Self {
            data_request: PickupDataRequest {
                order_activation: PickupOrderActivation {
                    order_id: order_ids,
                    timeslot,
                },
            },
        }
    }
}

/// 取消取件请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupCancelRequest {
    pub pickup_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pickup_request_shape() {
        let request = PickupRequest::new(
            vec!["22Y5QQ".to_string()],
            PickupTimeslot {
                start_time: "2024-01-01T09:00:00+07:00".to_string(),
                end_time: "2024-01-01T12:00:00+07:00".to_string(),
            },
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "data_request": {
                    "order_activation": {
                        "order_id": ["22Y5QQ"],
                        "start_time": "2024-01-01T09:00:00+07:00",
                        "end_time": "2024-01-01T12:00:00+07:00"
                    }
                }
            })
        );
    }
}
