// 响应数据模型
// Shipper v3 接口统一的响应信封

use serde::{Deserialize, Serialize};

/// 标准API响应格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipperResponse<T> {
    /// 响应元数据
    pub metadata: Metadata,
    /// 响应数据
    pub data: T,
    /// 分页信息 (列表接口)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// 响应元数据
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// 请求路径
    #[serde(default)]
    pub path: String,
    /// HTTP状态码
    #[serde(default)]
    pub http_status_code: u16,
    /// HTTP状态描述
    #[serde(default)]
    pub http_status: String,
    /// 服务端时间戳 (秒)
    #[serde(default)]
    pub timestamp: i64,
}

/// 分页信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub current_elements: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u32,
}

impl<T> ShipperResponse<T> {
    /// 检查接口是否返回成功状态
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.metadata.http_status_code)
    }

    /// 服务端时间
    pub fn server_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.metadata.timestamp, 0)
    }

    /// 取出响应数据
    pub fn into_data(self) -> T {
        self.data
    }
}
