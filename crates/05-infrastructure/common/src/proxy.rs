//! 方法拦截代理
//!
//! [`Proxy`] 组合被代理实例与拦截器。`#[interceptable]` 宏为 trait 生成
//! `impl Trait for Proxy<dyn Trait>`，使代理可以替换原实例出现在任何
//! 需要 `Arc<dyn Trait>` 的地方。

use std::fmt;
use std::sync::Arc;

/// 方法调用信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInvocation<'a> {
    /// 被代理的视图类型
    pub target_type: &'a str,
    /// 方法名称
    pub method: &'a str,
}

/// 方法拦截器 trait
pub trait MethodInterceptor: Send + Sync {
    /// 方法调用前
    fn before(&self, invocation: &MethodInvocation<'_>);

    /// 方法正常返回后
    fn after(&self, invocation: &MethodInvocation<'_>);
}

/// 方法拦截代理
pub struct Proxy<T: ?Sized> {
    target: Arc<T>,
    interceptor: Arc<dyn MethodInterceptor>,
}

impl<T: ?Sized> Proxy<T> {
    /// 创建代理
    pub fn new(target: Arc<T>, interceptor: Arc<dyn MethodInterceptor>) -> Self {
        Self {
            target,
            interceptor,
        }
    }

    /// 被代理的实例
    pub fn target(&self) -> &Arc<T> {
        &self.target
    }

    /// 经拦截器调用目标方法
    ///
    /// 返回值原样传出。`call` panic 时不会触发 `after`。
    pub fn invoke<'a, R>(&'a self, method: &'static str, call: impl FnOnce(&'a T) -> R) -> R {
        let invocation = MethodInvocation {
            target_type: std::any::type_name::<T>(),
            method,
        };

        self.interceptor.before(&invocation);
        let result = call(self.target.as_ref());
        self.interceptor.after(&invocation);
        result
    }
}

impl<T: ?Sized> Clone for Proxy<T> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            interceptor: Arc::clone(&self.interceptor),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Proxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
