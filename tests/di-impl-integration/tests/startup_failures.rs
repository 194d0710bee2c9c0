//! 启动失败与解析失败集成测试

use di_abstractions::BeanFactory;
use di_impl::ApplicationContext;
use infrastructure_common::{
    ContainerConfig, ContainerError, DependencyError, ScanError, DEFAULT_MAX_RESOLUTION_DEPTH,
};

mod orphan {
    use component_macros::Component;
    use infrastructure_common::Autowired;

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct UserService;

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct OrderService {
        #[autowired]
        pub payment_gateway: Autowired<UserService>,
    }
}

mod lazy_orphan {
    use component_macros::Component;
    use infrastructure_common::Autowired;

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct Ledger;

    #[derive(Debug, Default, Component)]
    #[component]
    #[lazy]
    pub struct Settlement {
        #[autowired]
        pub clearing_house: Autowired<Ledger>,
    }
}

mod cyclic {
    use component_macros::Component;
    use infrastructure_common::Autowired;

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct CyclicA {
        #[autowired]
        pub cyclic_b: Autowired<CyclicB>,
    }

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct CyclicB {
        #[autowired]
        pub cyclic_a: Autowired<CyclicA>,
    }
}

mod broken {
    use component_macros::Component;

    #[derive(Debug, Component)]
    #[component]
    pub struct DataSource;

    impl Default for DataSource {
        fn default() -> Self {
            panic!("数据源未配置")
        }
    }
}

fn build(path: &str) -> Result<std::sync::Arc<ApplicationContext>, ContainerError> {
    ApplicationContext::new(ContainerConfig::for_package(path))
}

#[test]
fn test_missing_dependency_aborts_startup() {
    match build("startup_failures.orphan") {
        Err(ContainerError::DependencyError {
            source: DependencyError::BeanNotDefined { name },
        }) => assert_eq!(name, "paymentGateway"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_missing_dependency_of_lazy_bean_fails_on_lookup() -> anyhow::Result<()> {
    let context = build("startup_failures.lazy_orphan")?;

    let error = context.get_bean("settlement").unwrap_err();
    assert!(matches!(
        error,
        DependencyError::BeanNotDefined { ref name } if name == "clearingHouse"
    ));
    assert!(!context.contains_singleton("settlement"));

    // 失败不影响其他 Bean
    assert!(context.get_bean("ledger").is_ok());
    Ok(())
}

#[test]
fn test_mutual_dependency_exceeds_resolution_depth() {
    match build("startup_failures.cyclic") {
        Err(ContainerError::DependencyError {
            source: DependencyError::ResolutionDepthExceeded { max_depth, chain },
        }) => {
            assert_eq!(max_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
            assert!(chain.starts_with("cyclicA -> cyclicB -> cyclicA -> cyclicB"));
            assert_eq!(chain.split(" -> ").count(), DEFAULT_MAX_RESOLUTION_DEPTH + 1);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_panicking_constructor_aborts_startup() {
    match build("startup_failures.broken") {
        Err(ContainerError::DependencyError {
            source: DependencyError::InstantiationFailed { type_name, source },
        }) => {
            assert!(type_name.ends_with("DataSource"));
            assert_eq!(source.to_string(), "数据源未配置");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_unknown_package_aborts_startup() {
    assert!(matches!(
        build("startup_failures.missing"),
        Err(ContainerError::ScanError {
            source: ScanError::PackageNotFound { .. }
        })
    ));
}

#[test]
fn test_invalid_scan_path_aborts_startup() {
    assert!(matches!(
        build("startup_failures..9lives"),
        Err(ContainerError::ScanError {
            source: ScanError::InvalidScanPath { .. }
        })
    ));
}

#[test]
fn test_unknown_bean_lookup() -> anyhow::Result<()> {
    let context = ApplicationContext::new(ContainerConfig::default())?;

    let error = context.get_bean("userService").unwrap_err();
    assert_eq!(error.to_string(), "未定义bean: userService");
    Ok(())
}
