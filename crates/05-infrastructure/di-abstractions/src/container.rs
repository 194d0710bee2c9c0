//! 容器抽象接口
//!
//! 提供感知回调、上下文句柄和容器统计信息

use crate::resolver::{BeanFactory, BeanFactoryExt};
use infrastructure_common::{BeanObject, DependencyError, DependencyResult};
use std::fmt;
use std::sync::{Arc, Weak};

/// Bean 名称感知 trait
///
/// 实例在注入完成后获得自己的 Bean 名称
pub trait BeanNameAware {
    /// 设置 Bean 名称
    fn set_bean_name(&mut self, name: &str);
}

/// 应用上下文感知 trait
///
/// 实例在注入完成后获得上下文句柄，之后可以按需查找其他 Bean
pub trait ApplicationContextAware {
    /// 设置应用上下文
    fn set_application_context(&mut self, context: ApplicationContextHandle);
}

/// 应用上下文句柄
///
/// 只暴露 Bean 查找能力，并且不延长容器的生命周期
#[derive(Clone)]
pub struct ApplicationContextHandle {
    factory: Weak<dyn BeanFactory>,
}

impl ApplicationContextHandle {
    /// 从容器的弱引用创建句柄
    pub fn new(factory: Weak<dyn BeanFactory>) -> Self {
        Self { factory }
    }

    /// 未关联任何容器的句柄
    pub fn detached() -> Self {
        Self {
            factory: Weak::<Detached>::new(),
        }
    }

    fn factory(&self) -> DependencyResult<Arc<dyn BeanFactory>> {
        self.factory
            .upgrade()
            .ok_or(DependencyError::ContextUnavailable)
    }

    /// 获取 Bean
    pub fn get_bean(&self, name: &str) -> DependencyResult<BeanObject> {
        self.factory()?.get_bean(name)
    }

    /// 获取 Bean 并转换为发布的视图类型
    pub fn get_bean_as<V>(&self, name: &str) -> DependencyResult<Arc<V>>
    where
        V: ?Sized + Send + Sync + 'static,
    {
        self.factory()?.get_bean_as::<V>(name)
    }

    /// 是否定义了指定名称的 Bean
    pub fn contains_bean(&self, name: &str) -> bool {
        self.factory()
            .map(|factory| factory.contains_bean(name))
            .unwrap_or(false)
    }

    /// 容器是否仍然可用
    pub fn is_available(&self) -> bool {
        self.factory.strong_count() > 0
    }
}

impl fmt::Debug for ApplicationContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContextHandle")
            .field("available", &self.is_available())
            .finish()
    }
}

struct Detached;

impl BeanFactory for Detached {
    fn get_bean(&self, name: &str) -> DependencyResult<BeanObject> {
        Err(DependencyError::bean_not_defined(name))
    }

    fn contains_bean(&self, _name: &str) -> bool {
        false
    }

    fn is_singleton(&self, name: &str) -> DependencyResult<bool> {
        Err(DependencyError::bean_not_defined(name))
    }

    fn is_prototype(&self, name: &str) -> DependencyResult<bool> {
        Err(DependencyError::bean_not_defined(name))
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 已注册 Bean 定义数量
    pub registered_definitions: usize,
    /// 已缓存单例数量
    pub cached_singletons: usize,
}
