//! # Dependency Injection Abstractions
//! 
//! 依赖注入抽象层，定义组件发现、Bean 定义注册和依赖解析的核心接口。
//! 
//! ## 核心接口
//! 
//! - [`ClassLoader`] / [`ClassPath`] - 类路径与类加载
//! - [`BeanDefinitionRegistry`] - Bean 定义注册表接口
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`BeanFactory`] - Bean 获取接口
//! - [`BeanInjector`] - 实例创建与属性注入接口
//! - [`ProxyFactory`] - 代理工厂接口

pub mod container;
pub mod discovery;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use container::*;
pub use discovery::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;
