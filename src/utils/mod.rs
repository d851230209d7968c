// 工具函数模块
// 包含API地址与密钥的校验

pub mod validation;

// 重新导出常用函数
pub use validation::*;
