//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn IoC 容器各层共享的基础类型和工具。
//!
//! ## 核心组件
//!
//! - [`BeanObject`] - 类型擦除的 Bean 句柄
//! - [`Autowired`] - 按名称注入的字段容器
//! - [`Proxy`] - 方法拦截代理
//! - [`ContainerConfig`] - 容器配置描述
//! - [`NamingConventions`] - Bean 命名约定
//!
//! ## 设计原则
//!
//! - 编译时生成元数据，运行时不依赖反射
//! - 同步构建，失败即终止
//! - 约定优于配置

pub mod bean;
pub mod configuration;
pub mod conventions;
pub mod errors;
pub mod metadata;
pub mod proxy;

pub use bean::*;
pub use configuration::*;
pub use conventions::*;
pub use errors::*;
pub use metadata::*;
pub use proxy::*;
