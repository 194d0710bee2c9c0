//! 作用域、懒加载、命名和感知回调集成测试

use di_abstractions::{BeanFactory, BeanFactoryExt};
use di_impl::ApplicationContext;
use infrastructure_common::{ContainerConfig, DependencyError};
use std::sync::Arc;

mod beans {
    use component_macros::Component;
    use di_abstractions::{ApplicationContextAware, ApplicationContextHandle, BeanNameAware};
    use infrastructure_common::Autowired;

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct Clock;

    #[derive(Debug, Default, Component)]
    #[component]
    #[lazy]
    pub struct ReportCache {
        #[autowired]
        pub clock: Autowired<Clock>,
    }

    #[derive(Debug, Default, Component)]
    #[component("task")]
    #[scope("prototype")]
    pub struct ReportTask {
        #[autowired]
        pub clock: Autowired<Clock>,
        #[autowired]
        pub report_cache: Autowired<ReportCache>,
    }

    /// 依赖排序在它之后的 Bean
    #[derive(Debug, Default, Component)]
    #[component]
    pub struct AlphaConsumer {
        #[autowired]
        pub zeta_provider: Autowired<ZetaProvider>,
    }

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct ZetaProvider;

    #[derive(Debug, Default, Component)]
    #[component]
    #[aware(bean_name, application_context)]
    pub struct Auditor {
        pub name: Option<String>,
        pub context: Option<ApplicationContextHandle>,
    }

    impl BeanNameAware for Auditor {
        fn set_bean_name(&mut self, name: &str) {
            self.name = Some(name.to_string());
        }
    }

    impl ApplicationContextAware for Auditor {
        fn set_application_context(&mut self, context: ApplicationContextHandle) {
            self.context = Some(context);
        }
    }
}

mod dupes {
    use component_macros::Component;

    #[derive(Debug, Default, Component)]
    #[component("repository")]
    pub struct AlphaRepository;

    #[derive(Debug, Default, Component)]
    #[component("repository")]
    #[scope("prototype")]
    pub struct BetaRepository;
}

use beans::{AlphaConsumer, Auditor, Clock, ReportCache, ReportTask, ZetaProvider};

fn context() -> Arc<ApplicationContext> {
    ApplicationContext::new(ContainerConfig::for_package("bean_scopes.beans")).unwrap()
}

#[test]
fn test_lazy_singleton_created_on_demand() -> anyhow::Result<()> {
    let context = context();

    assert!(context.contains_singleton("clock"));
    assert!(!context.contains_singleton("reportCache"));

    let first = context.get_bean_as::<ReportCache>("reportCache")?;
    assert!(context.contains_singleton("reportCache"));
    let second = context.get_bean_as::<ReportCache>("reportCache")?;
    assert!(Arc::ptr_eq(&first, &second));

    let clock = context.get_bean_as::<Clock>("clock")?;
    assert!(Arc::ptr_eq(first.clock.get().unwrap(), &clock));
    Ok(())
}

#[test]
fn test_prototype_instances_are_independent() -> anyhow::Result<()> {
    let context = context();

    let first = context.get_bean_as::<ReportTask>("task")?;
    let second = context.get_bean_as::<ReportTask>("task")?;
    assert!(!Arc::ptr_eq(&first, &second));

    // 单例依赖在两个原型实例之间共享
    assert!(Arc::ptr_eq(
        first.clock.get().unwrap(),
        second.clock.get().unwrap()
    ));
    // 原型依赖懒加载单例时会触发它的创建
    assert!(context.contains_singleton("reportCache"));
    assert!(Arc::ptr_eq(
        first.report_cache.get().unwrap(),
        &context.get_bean_as::<ReportCache>("reportCache")?
    ));

    assert!(context.is_prototype("task")?);
    assert!(!context.contains_singleton("task"));
    Ok(())
}

#[test]
fn test_forward_reference_is_resolved_once() -> anyhow::Result<()> {
    let context = context();

    let consumer = context.get_bean_as::<AlphaConsumer>("alphaConsumer")?;
    let provider = context.get_bean_as::<ZetaProvider>("zetaProvider")?;
    assert!(Arc::ptr_eq(consumer.zeta_provider.get().unwrap(), &provider));
    Ok(())
}

#[test]
fn test_stats() {
    let context = context();
    let stats = context.stats();

    assert_eq!(stats.registered_definitions, 6);
    // clock, alphaConsumer, zetaProvider, auditor
    assert_eq!(stats.cached_singletons, 4);
}

#[test]
fn test_aware_bean() -> anyhow::Result<()> {
    let context = context();

    let auditor = context.get_bean_as::<Auditor>("auditor")?;
    assert_eq!(auditor.name.as_deref(), Some("auditor"));

    let handle = auditor.context.clone().unwrap();
    assert!(handle.contains_bean("clock"));
    let clock = handle.get_bean_as::<Clock>("clock")?;
    assert!(Arc::ptr_eq(&clock, &context.get_bean_as::<Clock>("clock")?));

    drop(context);
    assert!(matches!(
        handle.get_bean("clock"),
        Err(DependencyError::ContextUnavailable)
    ));
    Ok(())
}

#[test]
fn test_duplicate_names_last_scanned_wins() -> anyhow::Result<()> {
    let context = ApplicationContext::new(ContainerConfig::for_package("bean_scopes::dupes"))?;

    assert_eq!(context.bean_definition_names(), vec!["repository".to_string()]);
    assert!(context.is_prototype("repository")?);
    assert!(context
        .get_bean_as::<dupes::BetaRepository>("repository")
        .is_ok());
    assert!(matches!(
        context.get_bean_as::<dupes::AlphaRepository>("repository"),
        Err(DependencyError::BeanTypeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_sub_packages_are_not_scanned() -> anyhow::Result<()> {
    let context = ApplicationContext::new(ContainerConfig::for_package("bean_scopes"))?;

    assert!(context.bean_definition_names().is_empty());
    assert!(context.get_bean("clock").unwrap_err().is_bean_not_defined());
    Ok(())
}
