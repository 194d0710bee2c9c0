//! # Component Macros
//!
//! 这个 crate 提供了编译时组件登记相关的过程宏。
//!
//! ## 核心宏
//!
//! - [`Component`](derive@Component) - 组件派生宏，生成类描述符并在程序启动时登记到全局类路径
//! - [`Configuration`](derive@Configuration) - 配置类派生宏，声明组件扫描路径
//! - [`interceptable`] - 为 trait 生成方法拦截代理
//!
//! 生成的代码引用 `di_abstractions`、`infrastructure_common` 和 `ctor`，
//! 使用方需要依赖这三个 crate。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::{interceptable, Component, Configuration};
//! use infrastructure_common::Autowired;
//!
//! #[derive(Default, Component)]
//! #[component]
//! pub struct UserService;
//!
//! #[interceptable]
//! pub trait OrderOps: Send + Sync {
//!     fn test(&self);
//! }
//!
//! #[derive(Default, Component)]
//! #[component]
//! #[transactional(dyn OrderOps)]
//! pub struct OrderService {
//!     #[autowired]
//!     user_service: Autowired<UserService>,
//! }
//!
//! #[derive(Configuration)]
//! #[component_scan("my_app.service")]
//! pub struct AppConfig;
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemTrait};

mod component;
mod configuration;
mod interceptable;
mod utils;

/// 组件派生宏
///
/// 为结构体实现 `ComponentClass` 和 `ManagedObject`，并在程序启动时登记到全局类路径。
/// 结构体必须实现 `Default`，它相当于零参数构造函数。
///
/// # 标记
///
/// - `#[component]` / `#[component("name")]` / `#[component(name = "name")]` - 组件标记，
///   未指定名称时使用首字母小写的类型名
/// - `#[scope("singleton" | "prototype")]` - 作用域（默认单例）
/// - `#[lazy]` - 单例在首次获取时才创建
/// - `#[transactional(dyn Trait)]` - 以事务代理发布，trait 需要带 `#[interceptable]`
/// - `#[aware(bean_name, application_context)]` - 接收 Bean 名称或上下文句柄
/// - 字段上的 `#[autowired]` - 按字段名注入，字段类型为 `Autowired<T>`
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Default, Component)]
/// #[component("orderService")]
/// #[scope("prototype")]
/// pub struct OrderService {
///     #[autowired]
///     user_service: Autowired<UserService>,
/// }
/// ```
#[proc_macro_derive(
    Component,
    attributes(component, scope, lazy, transactional, aware, autowired)
)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    component::derive_component_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 配置类派生宏
///
/// 为结构体实现 `ScanConfiguration`。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Configuration)]
/// #[component_scan("com.ll.service")]
/// pub struct AppConfig;
/// ```
#[proc_macro_derive(Configuration, attributes(component_scan))]
pub fn derive_configuration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    configuration::derive_configuration_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 可拦截接口宏
///
/// 为 trait 生成 `impl Trait for Proxy<dyn Trait>`。trait 只能包含接收者为 `&self`
/// 的方法，并且需要 `Send + Sync` 约束。
///
/// # 示例
///
/// ```rust,ignore
/// #[interceptable]
/// pub trait OrderOps: Send + Sync {
///     fn test(&self);
/// }
/// ```
#[proc_macro_attribute]
pub fn interceptable(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemTrait);
    interceptable::interceptable_impl(args.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
