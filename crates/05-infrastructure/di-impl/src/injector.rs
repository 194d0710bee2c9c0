//! 按名称注入的 Bean 注入器

use di_abstractions::{
    BeanDefinition, BeanInjector, DependencyResolver, ManagedObject, ResolveContext,
};
use infrastructure_common::DependencyResult;
use tracing::debug;

/// 按字段名自动装配的注入器
///
/// 创建顺序：实例化，按声明顺序注入字段，然后执行名称感知和上下文感知回调
#[derive(Debug, Default, Clone, Copy)]
pub struct AutowireInjector;

impl AutowireInjector {
    /// 创建新的注入器
    pub fn new() -> Self {
        Self
    }
}

impl BeanInjector for AutowireInjector {
    fn create_instance(
        &self,
        bean_name: &str,
        definition: &BeanDefinition,
        resolver: &dyn DependencyResolver,
        context: &mut ResolveContext,
    ) -> DependencyResult<Box<dyn ManagedObject>> {
        let class = definition.class();
        let mut instance = class.instantiate()?;

        for point in class.injection_points() {
            // 字段标识符与 Bean 名称完全一致时优先使用，否则按命名约定转换
            let target = point
                .candidate_names()
                .find(|name| resolver.contains_dependency(name))
                .unwrap_or(point.bean_name.as_str());

            debug!("注入字段: {}.{} <- {}", bean_name, point.field, target);
            let dependency = resolver.resolve_dependency(target, context)?;
            instance.inject(&point.field, &dependency)?;
        }

        if let Some(aware) = instance.as_bean_name_aware() {
            aware.set_bean_name(bean_name);
        }

        if let Some(aware) = instance.as_context_aware() {
            aware.set_application_context(resolver.context_handle());
        }

        Ok(instance)
    }
}
