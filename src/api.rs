// 接口处理器注册表
// 按资源名称查找处理器工厂，并以Shipper实例构造处理器

mod location;
mod logistic;
mod order;
mod pickup;
mod pricing;

pub use location::Location;
pub use logistic::Logistic;
pub use order::Order;
pub use pickup::Pickup;
pub use pricing::Pricing;

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use crate::error::{Result, ShipperError};
use crate::shipper::Shipper;

/// 类型擦除后向下转型
pub trait AsAny: Any {
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// 资源接口处理器
pub trait ShipperApi: AsAny + Send + Sync {
    /// 注册名称
    fn name(&self) -> &'static str;

    /// 构造处理器时传入的Shipper实例
    fn shipper(&self) -> &Shipper;
}

/// 可通过 `ApiRegistry::register_handler` 注册的处理器
pub trait ApiHandler: ShipperApi + Sized {
    const NAME: &'static str;

    fn new(shipper: Shipper) -> Self;
}

/// 处理器工厂函数
pub type ApiFactory = fn(Shipper) -> Box<dyn ShipperApi>;

fn construct<T: ApiHandler>(shipper: Shipper) -> Box<dyn ShipperApi> {
    Box::new(T::new(shipper))
}

/// 资源名称到处理器工厂的映射
#[derive(Clone)]
pub struct ApiRegistry {
    factories: HashMap<String, ApiFactory>,
}

impl ApiRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// 注册处理器工厂，同名注册会覆盖原有工厂
    ///
    /// # Arguments
    /// * `name` - 资源名称 (大小写不敏感)
    /// * `factory` - 工厂函数
    pub fn register(&mut self, name: &str, factory: ApiFactory) -> &mut Self {
        let key = normalize(name);
        if self.factories.insert(key.clone(), factory).is_some() {
            log::debug!("Replaced Shipper API handler {}", key);
        }
        self
    }

    /// 按处理器自身的名称注册
    pub fn register_handler<T: ApiHandler>(&mut self) -> &mut Self {
        self.register(T::NAME, construct::<T>)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&normalize(name))
    }

    /// 已注册的资源名称 (按字母排序)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 解析资源名称并构造处理器
    ///
    /// # Arguments
    /// * `name` - 资源名称
    /// * `shipper` - 传给处理器的Shipper实例
    ///
    /// # Returns
    /// * 处理器实例，未注册时返回 `ShipperError::ApiNotFound`
    pub fn resolve(&self, name: &str, shipper: Shipper) -> Result<Box<dyn ShipperApi>> {
        match self.factories.get(&normalize(name)) {
            Some(factory) => {
                log::debug!("Resolved Shipper API handler {}", handler_name(name));
                Ok(factory(shipper))
            }
            None => Err(ShipperError::ApiNotFound(handler_name(name))),
        }
    }
}

impl Default for ApiRegistry {
    /// 包含全部内置处理器的注册表
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register_handler::<Location>()
            .register_handler::<Logistic>()
            .register_handler::<Order>()
            .register_handler::<Pickup>()
            .register_handler::<Pricing>();
        registry
    }
}

impl fmt::Debug for ApiRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 首字母大写
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 资源名称对应的处理器路径，如 `location` -> `shipper::api::location::Location`
pub fn handler_name(name: &str) -> String {
    let name = name.trim();
    format!("{}::{}::{}", module_path!(), normalize(name), capitalize(name))
}
