// Shipper API 数据模型定义
// 包含响应信封、运费查询、订单、取件等请求结构

mod order;
mod pickup;
mod pricing;
mod response;

// 重新导出核心类型
pub use order::*;
pub use pickup::*;
pub use pricing::*;
pub use response::*;
