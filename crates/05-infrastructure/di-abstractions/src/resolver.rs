//! Bean 解析抽象接口
//!
//! 提供按名称获取 Bean 以及依赖解析的能力

use crate::container::ApplicationContextHandle;
use infrastructure_common::{
    BeanObject, DependencyError, DependencyResult, DEFAULT_MAX_RESOLUTION_DEPTH,
};
use std::sync::Arc;

/// Bean 工厂 trait
///
/// 按名称获取 Bean，对象安全
pub trait BeanFactory: Send + Sync {
    /// 获取 Bean
    ///
    /// 单例返回同一个实例，原型每次创建新实例
    fn get_bean(&self, name: &str) -> DependencyResult<BeanObject>;

    /// 是否定义了指定名称的 Bean
    fn contains_bean(&self, name: &str) -> bool;

    /// 指定 Bean 是否为单例
    fn is_singleton(&self, name: &str) -> DependencyResult<bool>;

    /// 指定 Bean 是否为原型
    fn is_prototype(&self, name: &str) -> DependencyResult<bool>;
}

/// Bean 工厂扩展
pub trait BeanFactoryExt: BeanFactory {
    /// 获取 Bean 并转换为发布的视图类型
    fn get_bean_as<V>(&self, name: &str) -> DependencyResult<Arc<V>>
    where
        V: ?Sized + Send + Sync + 'static,
    {
        self.get_bean(name)?.downcast::<V>()
    }
}

impl<F: BeanFactory + ?Sized> BeanFactoryExt for F {}

/// 依赖解析器 trait
///
/// 注入器通过它回到容器解析依赖
pub trait DependencyResolver {
    /// 在当前解析上下文中获取 Bean
    fn resolve_dependency(
        &self,
        name: &str,
        context: &mut ResolveContext,
    ) -> DependencyResult<BeanObject>;

    /// 是否定义了指定名称的 Bean
    fn contains_dependency(&self, name: &str) -> bool;

    /// 交给上下文感知 Bean 的句柄
    fn context_handle(&self) -> ApplicationContextHandle;
}

/// 解析上下文
///
/// 记录当前线程正在创建的 Bean 链
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// 当前解析链
    pub resolution_chain: Vec<String>,
    /// 最大解析深度
    pub max_depth: usize,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(max_depth: usize) -> Self {
        Self {
            resolution_chain: Vec::new(),
            max_depth,
        }
    }

    /// 进入一个 Bean 的创建
    pub fn enter(&mut self, name: &str) -> DependencyResult<()> {
        if self.resolution_chain.len() >= self.max_depth {
            let mut chain = self.resolution_chain.clone();
            chain.push(name.to_string());
            return Err(DependencyError::ResolutionDepthExceeded {
                max_depth: self.max_depth,
                chain: chain.join(" -> "),
            });
        }
        self.resolution_chain.push(name.to_string());
        Ok(())
    }

    /// 离开当前 Bean 的创建
    pub fn leave(&mut self) {
        self.resolution_chain.pop();
    }

    /// 当前深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESOLUTION_DEPTH)
    }
}
