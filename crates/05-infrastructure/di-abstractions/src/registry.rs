//! Bean 定义注册表抽象接口

use crate::discovery::ClassDescriptor;
use infrastructure_common::BeanScope;
use std::sync::Arc;

/// Bean 定义
///
/// 扫描时创建，注册后不再修改
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    class: Arc<ClassDescriptor>,
    scope: BeanScope,
    lazy: bool,
}

impl BeanDefinition {
    /// 创建新的 Bean 定义
    pub fn new(class: Arc<ClassDescriptor>, scope: BeanScope, lazy: bool) -> Self {
        Self { class, scope, lazy }
    }

    /// Bean 类型
    pub fn class(&self) -> &ClassDescriptor {
        &self.class
    }

    /// 作用域
    pub fn scope(&self) -> BeanScope {
        self.scope
    }

    /// 是否懒加载
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// 是否为单例
    pub fn is_singleton(&self) -> bool {
        self.scope == BeanScope::Singleton
    }

    /// 是否为原型
    pub fn is_prototype(&self) -> bool {
        self.scope == BeanScope::Prototype
    }

    /// 是否需要在启动时创建
    pub fn is_eager_singleton(&self) -> bool {
        self.is_singleton() && !self.lazy
    }
}

/// Bean 定义注册表 trait
///
/// 纯存储：同名注册时后者覆盖前者
pub trait BeanDefinitionRegistry: Send + Sync {
    /// 注册 Bean 定义
    fn register_bean_definition(&mut self, name: String, definition: BeanDefinition);

    /// 获取 Bean 定义
    fn get_bean_definition(&self, name: &str) -> Option<&BeanDefinition>;

    /// 是否包含指定名称
    fn contains_bean_definition(&self, name: &str) -> bool {
        self.get_bean_definition(name).is_some()
    }

    /// 所有已注册的 Bean 名称
    fn bean_definition_names(&self) -> Vec<String>;

    /// 已注册数量
    fn bean_definition_count(&self) -> usize;
}
