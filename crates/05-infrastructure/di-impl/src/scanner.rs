//! 类路径组件扫描器

use di_abstractions::{
    BeanDefinition, BeanDefinitionRegistry, ClassDescriptor, ClassLoader, ComponentScanner,
};
use infrastructure_common::{
    BeanScope, NamingConventions, ScanError, ScanPathConventions, ScanResult,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 类路径组件扫描器
///
/// 只扫描包的直接成员，不进入子包
pub struct ClassPathBeanScanner {
    class_loader: Arc<dyn ClassLoader>,
}

impl ClassPathBeanScanner {
    /// 创建新的扫描器
    pub fn new(class_loader: Arc<dyn ClassLoader>) -> Self {
        Self { class_loader }
    }

    /// 为带组件标记的类生成 Bean 名称和定义
    ///
    /// 没有组件标记的类返回 `None`
    pub fn build_definition(
        class: ClassDescriptor,
    ) -> ScanResult<Option<(String, BeanDefinition)>> {
        let Some(marker) = class.component() else {
            return Ok(None);
        };

        let bean_name = if marker.name.is_empty() {
            NamingConventions::default_bean_name(class.type_info().short_name())
        } else {
            marker.name.clone()
        };

        let scope = match class.scope() {
            Some(value) => {
                value
                    .parse::<BeanScope>()
                    .map_err(|unknown| ScanError::UnsupportedScope {
                        class_name: class.class_name(),
                        scope: unknown.0,
                    })?
            }
            None => BeanScope::Singleton,
        };

        let lazy = class.is_lazy();
        Ok(Some((bean_name, BeanDefinition::new(Arc::new(class), scope, lazy))))
    }
}

impl ComponentScanner for ClassPathBeanScanner {
    fn scan(
        &self,
        base_package: &str,
        registry: &mut dyn BeanDefinitionRegistry,
    ) -> ScanResult<usize> {
        let package = ScanPathConventions::normalize(base_package)?;
        info!("扫描组件: {}", package);

        let class_names = self.class_loader.list_classes(&package)?;
        let mut registered = 0;

        for class_name in class_names {
            let class = self.class_loader.load_class(&class_name)?;

            let Some((bean_name, definition)) = Self::build_definition(class)? else {
                debug!("跳过非组件类: {}", class_name);
                continue;
            };

            if let Some(previous) = registry.get_bean_definition(&bean_name) {
                warn!(
                    "Bean 名称 '{}' 重复: {} 覆盖 {}",
                    bean_name,
                    class_name,
                    previous.class().class_name()
                );
            }

            debug!(
                "注册 Bean 定义: {} -> {} (scope={}, lazy={})",
                bean_name,
                class_name,
                definition.scope(),
                definition.is_lazy()
            );
            registry.register_bean_definition(bean_name, definition);
            registered += 1;
        }

        info!("扫描完成: {} 中注册了 {} 个 Bean 定义", package, registered);
        Ok(registered)
    }

    fn name(&self) -> &str {
        "ClassPathBeanScanner"
    }
}
