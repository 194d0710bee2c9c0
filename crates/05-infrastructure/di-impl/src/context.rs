//! 应用上下文
//!
//! 负责扫描组件、预先创建非懒加载单例，并按名称提供 Bean

use crate::injector::AutowireInjector;
use crate::proxy::{TransactionManager, TransactionProxyFactory};
use crate::registry::DefaultBeanDefinitionRegistry;
use crate::scanner::ClassPathBeanScanner;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use di_abstractions::{
    ApplicationContextHandle, BeanDefinition, BeanDefinitionRegistry, BeanFactory, BeanInjector,
    ClassLoader, ComponentScanner, ContainerStats, DependencyResolver, GlobalClassLoader,
    ProxyFactory, ResolveContext,
};
use infrastructure_common::{
    BeanObject, ContainerConfig, ContainerResult, DependencyError, DependencyResult,
    MethodInterceptor, ScanConfiguration,
};
use parking_lot::ReentrantMutex;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, error, info};
use uuid::Uuid;

/// 应用上下文
///
/// 构造完成后只读，可以在多个线程间共享
pub struct ApplicationContext {
    /// 上下文 ID
    id: Uuid,
    /// 启动时间
    startup_date: DateTime<Utc>,
    /// 容器配置
    config: ContainerConfig,
    /// Bean 定义
    registry: DefaultBeanDefinitionRegistry,
    /// 单例缓存
    singleton_objects: DashMap<String, BeanObject>,
    /// 单例创建锁
    creation_lock: ReentrantMutex<()>,
    /// 注入器
    injector: Arc<dyn BeanInjector>,
    /// 代理工厂
    proxy_factory: Arc<dyn ProxyFactory>,
    /// 自身的弱引用，用于创建上下文句柄
    self_ref: Weak<ApplicationContext>,
}

impl ApplicationContext {
    /// 创建上下文构建器
    pub fn builder() -> ApplicationContextBuilder {
        ApplicationContextBuilder::new()
    }

    /// 使用指定配置创建上下文
    pub fn new(config: ContainerConfig) -> ContainerResult<Arc<Self>> {
        Self::builder().config(config).build()
    }

    /// 从配置类型创建上下文
    pub fn from_configuration<C: ScanConfiguration>() -> ContainerResult<Arc<Self>> {
        Self::new(ContainerConfig::from_configuration::<C>())
    }

    /// 上下文 ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 启动时间
    pub fn startup_date(&self) -> DateTime<Utc> {
        self.startup_date
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 所有 Bean 名称，按名称排序
    pub fn bean_definition_names(&self) -> Vec<String> {
        let mut names = self.registry.bean_definition_names();
        names.sort();
        names
    }

    /// 获取 Bean 定义
    pub fn bean_definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.registry.get_bean_definition(name)
    }

    /// 单例缓存中是否已有指定 Bean
    pub fn contains_singleton(&self, name: &str) -> bool {
        self.singleton_objects.contains_key(name)
    }

    /// 统计信息
    pub fn stats(&self) -> ContainerStats {
        ContainerStats {
            registered_definitions: self.registry.bean_definition_count(),
            cached_singletons: self.singleton_objects.len(),
        }
    }

    fn definition(&self, name: &str) -> DependencyResult<&BeanDefinition> {
        self.registry
            .get_bean_definition(name)
            .ok_or_else(|| DependencyError::bean_not_defined(name))
    }

    /// 预先创建所有非懒加载单例
    fn preinstantiate_singletons(&self) -> DependencyResult<()> {
        for name in self.bean_definition_names() {
            let eager = self
                .registry
                .get_bean_definition(&name)
                .map_or(false, BeanDefinition::is_eager_singleton);
            if eager {
                self.get_bean(&name)?;
            }
        }
        Ok(())
    }

    fn get_singleton(
        &self,
        name: &str,
        definition: &BeanDefinition,
        context: &mut ResolveContext,
    ) -> DependencyResult<BeanObject> {
        if let Some(bean) = self.singleton_objects.get(name) {
            debug!("命中单例缓存: {}", name);
            return Ok(bean.clone());
        }

        let _guard = self.creation_lock.lock();

        // 等待锁期间可能已被其他线程创建
        if let Some(bean) = self.singleton_objects.get(name) {
            return Ok(bean.clone());
        }

        let bean = self.create_bean(name, definition, context)?;
        self.singleton_objects.insert(name.to_string(), bean.clone());
        Ok(bean)
    }

    fn create_bean(
        &self,
        name: &str,
        definition: &BeanDefinition,
        context: &mut ResolveContext,
    ) -> DependencyResult<BeanObject> {
        context.enter(name)?;
        debug!("创建 Bean: {} ({})", name, definition.class().class_name());

        let result = self
            .injector
            .create_instance(name, definition, self, context)
            .and_then(|instance| self.proxy_factory.maybe_wrap(instance, definition));

        context.leave();
        result
    }
}

impl BeanFactory for ApplicationContext {
    fn get_bean(&self, name: &str) -> DependencyResult<BeanObject> {
        let mut context = ResolveContext::new(self.config.max_resolution_depth);
        self.resolve_dependency(name, &mut context)
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains_bean_definition(name)
    }

    fn is_singleton(&self, name: &str) -> DependencyResult<bool> {
        Ok(self.definition(name)?.is_singleton())
    }

    fn is_prototype(&self, name: &str) -> DependencyResult<bool> {
        Ok(self.definition(name)?.is_prototype())
    }
}

impl DependencyResolver for ApplicationContext {
    fn resolve_dependency(
        &self,
        name: &str,
        context: &mut ResolveContext,
    ) -> DependencyResult<BeanObject> {
        let definition = self.definition(name)?;
        if definition.is_singleton() {
            self.get_singleton(name, definition, context)
        } else {
            self.create_bean(name, definition, context)
        }
    }

    fn contains_dependency(&self, name: &str) -> bool {
        self.registry.contains_bean_definition(name)
    }

    fn context_handle(&self) -> ApplicationContextHandle {
        let factory: Weak<dyn BeanFactory> = self.self_ref.clone();
        ApplicationContextHandle::new(factory)
    }
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("id", &self.id)
            .field("startup_date", &self.startup_date)
            .field("config", &self.config)
            .field("bean_definitions", &self.bean_definition_names())
            .field("cached_singletons", &self.singleton_objects.len())
            .finish()
    }
}

/// 应用上下文构建器
pub struct ApplicationContextBuilder {
    config: ContainerConfig,
    class_loader: Arc<dyn ClassLoader>,
    injector: Arc<dyn BeanInjector>,
    proxy_factory: Option<Arc<dyn ProxyFactory>>,
    interceptor: Option<Arc<dyn MethodInterceptor>>,
    transaction_manager: Option<Arc<dyn TransactionManager>>,
}

impl ApplicationContextBuilder {
    /// 创建默认构建器：全局类路径、按名称注入、日志事务管理器
    pub fn new() -> Self {
        Self {
            config: ContainerConfig::default(),
            class_loader: Arc::new(GlobalClassLoader),
            injector: Arc::new(AutowireInjector::new()),
            proxy_factory: None,
            interceptor: None,
            transaction_manager: None,
        }
    }

    /// 设置容器配置
    pub fn config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置组件扫描路径
    pub fn component_scan(mut self, path: impl Into<String>) -> Self {
        self.config.component_scan = Some(path.into());
        self
    }

    /// 设置类加载器
    pub fn class_loader(mut self, class_loader: Arc<dyn ClassLoader>) -> Self {
        self.class_loader = class_loader;
        self
    }

    /// 设置注入器
    pub fn injector(mut self, injector: Arc<dyn BeanInjector>) -> Self {
        self.injector = injector;
        self
    }

    /// 设置代理工厂，优先于拦截器和事务管理器
    pub fn proxy_factory(mut self, proxy_factory: Arc<dyn ProxyFactory>) -> Self {
        self.proxy_factory = Some(proxy_factory);
        self
    }

    /// 设置事务 Bean 使用的拦截器，优先于事务管理器
    pub fn interceptor(mut self, interceptor: Arc<dyn MethodInterceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    /// 设置事务管理器
    pub fn transaction_manager(mut self, manager: Arc<dyn TransactionManager>) -> Self {
        self.transaction_manager = Some(manager);
        self
    }

    fn resolve_proxy_factory(&mut self) -> Arc<dyn ProxyFactory> {
        if let Some(factory) = self.proxy_factory.take() {
            return factory;
        }
        if let Some(interceptor) = self.interceptor.take() {
            return Arc::new(TransactionProxyFactory::new(interceptor));
        }
        match self.transaction_manager.take() {
            Some(manager) => Arc::new(TransactionProxyFactory::with_transaction_manager(manager)),
            None => Arc::new(TransactionProxyFactory::default()),
        }
    }

    /// 构建上下文
    ///
    /// 失败时不会返回部分构建的上下文
    pub fn build(mut self) -> ContainerResult<Arc<ApplicationContext>> {
        info!("开始启动应用上下文");

        // 第一步：验证配置
        self.config.validate()?;

        // 第二步：扫描组件
        let mut registry = DefaultBeanDefinitionRegistry::new();
        match &self.config.component_scan {
            Some(path) => {
                let scanner = ClassPathBeanScanner::new(Arc::clone(&self.class_loader));
                if let Err(e) = scanner.scan(path, &mut registry) {
                    error!("组件扫描失败: {}", e);
                    return Err(e.into());
                }
            }
            None => info!("未配置组件扫描路径，容器为空"),
        }

        // 第三步：创建上下文
        let proxy_factory = self.resolve_proxy_factory();
        let context = Arc::new_cyclic(|self_ref| ApplicationContext {
            id: Uuid::new_v4(),
            startup_date: Utc::now(),
            config: self.config,
            registry,
            singleton_objects: DashMap::new(),
            creation_lock: ReentrantMutex::new(()),
            injector: self.injector,
            proxy_factory,
            self_ref: self_ref.clone(),
        });

        // 第四步：预先创建非懒加载单例
        if let Err(e) = context.preinstantiate_singletons() {
            error!("预创建单例失败，启动中止: {}", e);
            return Err(e.into());
        }

        info!(
            id = %context.id,
            definitions = context.registry.bean_definition_count(),
            singletons = context.singleton_objects.len(),
            "应用上下文启动完成"
        );
        Ok(context)
    }
}

impl Default for ApplicationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ApplicationContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContextBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
