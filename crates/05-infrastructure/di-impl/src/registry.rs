//! Bean 定义注册表实现

use di_abstractions::{BeanDefinition, BeanDefinitionRegistry};
use std::collections::HashMap;

/// 默认 Bean 定义注册表
#[derive(Debug, Default)]
pub struct DefaultBeanDefinitionRegistry {
    definitions: HashMap<String, BeanDefinition>,
}

impl DefaultBeanDefinitionRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self::default()
    }
}

impl BeanDefinitionRegistry for DefaultBeanDefinitionRegistry {
    fn register_bean_definition(&mut self, name: String, definition: BeanDefinition) {
        self.definitions.insert(name, definition);
    }

    fn get_bean_definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.get(name)
    }

    fn bean_definition_names(&self) -> Vec<String> {
        self.definitions.keys().cloned().collect()
    }

    fn bean_definition_count(&self) -> usize {
        self.definitions.len()
    }
}
