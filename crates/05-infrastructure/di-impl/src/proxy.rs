//! 事务代理
//!
//! 带事务标记的 Bean 以 [`Proxy`](infrastructure_common::Proxy) 形态发布，
//! 每次接口方法调用前开启事务，正常返回后提交事务

use di_abstractions::{BeanDefinition, ManagedObject, ProxyFactory};
use infrastructure_common::{BeanObject, DependencyResult, MethodInterceptor, MethodInvocation};
use std::sync::Arc;
use tracing::{debug, info};

/// 事务管理器 trait
pub trait TransactionManager: Send + Sync {
    /// 开启事务
    fn begin(&self, invocation: &MethodInvocation<'_>);

    /// 提交事务
    fn commit(&self, invocation: &MethodInvocation<'_>);
}

/// 只记录日志的事务管理器
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingTransactionManager;

impl TransactionManager for LoggingTransactionManager {
    fn begin(&self, invocation: &MethodInvocation<'_>) {
        info!(
            target_type = invocation.target_type,
            method = invocation.method,
            "开启事务"
        );
    }

    fn commit(&self, invocation: &MethodInvocation<'_>) {
        info!(
            target_type = invocation.target_type,
            method = invocation.method,
            "提交事务"
        );
    }
}

/// 事务拦截器
pub struct TransactionInterceptor {
    manager: Arc<dyn TransactionManager>,
}

impl TransactionInterceptor {
    /// 创建新的事务拦截器
    pub fn new(manager: Arc<dyn TransactionManager>) -> Self {
        Self { manager }
    }
}

impl Default for TransactionInterceptor {
    fn default() -> Self {
        Self::new(Arc::new(LoggingTransactionManager))
    }
}

impl MethodInterceptor for TransactionInterceptor {
    fn before(&self, invocation: &MethodInvocation<'_>) {
        self.manager.begin(invocation);
    }

    fn after(&self, invocation: &MethodInvocation<'_>) {
        self.manager.commit(invocation);
    }
}

/// 事务代理工厂
///
/// 所有事务 Bean 共享同一个拦截器
#[derive(Clone)]
pub struct TransactionProxyFactory {
    interceptor: Arc<dyn MethodInterceptor>,
}

impl TransactionProxyFactory {
    /// 使用指定拦截器创建
    pub fn new(interceptor: Arc<dyn MethodInterceptor>) -> Self {
        Self { interceptor }
    }

    /// 使用指定事务管理器创建
    pub fn with_transaction_manager(manager: Arc<dyn TransactionManager>) -> Self {
        Self::new(Arc::new(TransactionInterceptor::new(manager)))
    }
}

impl Default for TransactionProxyFactory {
    fn default() -> Self {
        Self::new(Arc::new(TransactionInterceptor::default()))
    }
}

impl ProxyFactory for TransactionProxyFactory {
    fn maybe_wrap(
        &self,
        instance: Box<dyn ManagedObject>,
        definition: &BeanDefinition,
    ) -> DependencyResult<BeanObject> {
        if definition.class().is_transactional() {
            debug!("创建事务代理: {}", definition.class().class_name());
            instance.into_proxy(Arc::clone(&self.interceptor))
        } else {
            Ok(instance.into_bean())
        }
    }
}
