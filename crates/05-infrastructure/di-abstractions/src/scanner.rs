//! 组件扫描器抽象接口

use crate::registry::BeanDefinitionRegistry;
use infrastructure_common::ScanResult;

/// 组件扫描器 trait
///
/// 扫描一个包路径下的候选类型，把带组件标记的类型注册为 Bean 定义
pub trait ComponentScanner: Send + Sync {
    /// 扫描并注册，返回注册的 Bean 数量
    fn scan(&self, base_package: &str, registry: &mut dyn BeanDefinitionRegistry)
        -> ScanResult<usize>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
