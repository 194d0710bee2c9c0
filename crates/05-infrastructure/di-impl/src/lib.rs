//! # 依赖注入具体实现
//!
//! 提供组件扫描器、Bean 定义注册表、按名称注入的注入器、事务代理工厂，
//! 以及把它们组合起来的应用上下文

pub mod context;
pub mod injector;
pub mod proxy;
pub mod registry;
pub mod scanner;


pub use context::*;
pub use injector::*;
pub use proxy::*;
pub use registry::*;
pub use scanner::*;
