//! 实例创建抽象接口
//!
//! 提供受管实例、注入器和代理工厂的抽象

use crate::container::{ApplicationContextAware, BeanNameAware};
use crate::registry::BeanDefinition;
use crate::resolver::{DependencyResolver, ResolveContext};
use infrastructure_common::{BeanObject, DependencyError, DependencyResult, MethodInterceptor};
use std::any::Any;
use std::sync::Arc;

/// 受管实例 trait
///
/// 容器创建的实例在发布前以此形态存在：可以按字段名注入依赖，
/// 可以暴露感知能力，最后转换为 [`BeanObject`] 发布
pub trait ManagedObject: Send + Sync + 'static {
    /// 向指定字段注入 Bean
    fn inject(&mut self, field: &str, bean: &BeanObject) -> DependencyResult<()>;

    /// Bean 名称感知能力
    fn as_bean_name_aware(&mut self) -> Option<&mut dyn BeanNameAware> {
        None
    }

    /// 应用上下文感知能力
    fn as_context_aware(&mut self) -> Option<&mut dyn ApplicationContextAware> {
        None
    }

    /// 以原始形态发布
    fn into_bean(self: Box<Self>) -> BeanObject;

    /// 以代理形态发布
    fn into_proxy(
        self: Box<Self>,
        interceptor: Arc<dyn MethodInterceptor>,
    ) -> DependencyResult<BeanObject> {
        let _ = interceptor;
        Err(DependencyError::ProxyCreationFailed {
            type_name: std::any::type_name::<Self>().to_string(),
            message: "类型没有声明可代理的接口".to_string(),
        })
    }
}

/// 使用 `Default` 作为零参数构造函数创建实例
///
/// 构造过程中的 panic 被转换为实例化失败
pub fn instantiate_default<T>() -> DependencyResult<Box<dyn ManagedObject>>
where
    T: ManagedObject + Default,
{
    match std::panic::catch_unwind(T::default) {
        Ok(instance) => Ok(Box::new(instance)),
        Err(payload) => Err(DependencyError::InstantiationFailed {
            type_name: std::any::type_name::<T>().to_string(),
            source: panic_message(payload.as_ref()).into(),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "构造函数 panic".to_string()
    }
}

/// Bean 注入器 trait
///
/// 负责实例化、按名称注入字段以及感知回调
pub trait BeanInjector: Send + Sync {
    /// 创建完成注入的实例
    fn create_instance(
        &self,
        bean_name: &str,
        definition: &BeanDefinition,
        resolver: &dyn DependencyResolver,
        context: &mut ResolveContext,
    ) -> DependencyResult<Box<dyn ManagedObject>>;
}

/// 代理工厂 trait
pub trait ProxyFactory: Send + Sync {
    /// 需要时为实例创建代理，否则原样发布
    fn maybe_wrap(
        &self,
        instance: Box<dyn ManagedObject>,
        definition: &BeanDefinition,
    ) -> DependencyResult<BeanObject>;
}
