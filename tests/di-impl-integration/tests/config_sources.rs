//! 配置来源集成测试

use di_abstractions::BeanFactory;
use di_impl::ApplicationContext;
use infrastructure_common::{ConfigError, ContainerConfig, ContainerError, RESOLUTION_DEPTH_LIMIT};
use std::io::Write;

mod service {
    use component_macros::Component;

    #[derive(Debug, Default, Component)]
    #[component]
    pub struct GreetingService;
}

#[test]
fn test_context_from_toml_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[container]")?;
    writeln!(file, "component_scan = \"config_sources/service\"")?;
    writeln!(file, "max_resolution_depth = 16")?;

    let context = ApplicationContext::new(ContainerConfig::from_file(file.path())?)?;

    assert_eq!(context.config().max_resolution_depth, 16);
    assert!(context.contains_bean("greetingService"));
    assert!(context.contains_singleton("greetingService"));
    Ok(())
}

#[test]
fn test_env_overrides() -> anyhow::Result<()> {
    std::env::set_var("CONFIG_SOURCES_IT_COMPONENT_SCAN", "config_sources::service");
    let config = ContainerConfig::default().with_env_overrides("CONFIG_SOURCES_IT")?;
    std::env::remove_var("CONFIG_SOURCES_IT_COMPONENT_SCAN");

    let context = ApplicationContext::new(config)?;
    assert!(context.contains_bean("greetingService"));
    Ok(())
}

#[test]
fn test_builder_component_scan() -> anyhow::Result<()> {
    let context = ApplicationContext::builder()
        .component_scan("config_sources.service")
        .build()?;

    assert_eq!(context.bean_definition_names(), vec!["greetingService".to_string()]);
    Ok(())
}

#[test]
fn test_invalid_depth_is_rejected() {
    let result = ApplicationContext::new(ContainerConfig {
        max_resolution_depth: 0,
        ..ContainerConfig::for_package("config_sources.service")
    });

    assert!(matches!(
        result,
        Err(ContainerError::ConfigError {
            source: ConfigError::ValidationError { .. }
        })
    ));
}

#[test]
fn test_depth_above_limit_is_rejected() {
    let result = ApplicationContext::new(ContainerConfig {
        max_resolution_depth: RESOLUTION_DEPTH_LIMIT + 1,
        ..ContainerConfig::for_package("config_sources.service")
    });

    assert!(matches!(
        result,
        Err(ContainerError::ConfigError {
            source: ConfigError::ValidationError { .. }
        })
    ));
}

#[test]
fn test_missing_config_file() {
    assert!(matches!(
        ContainerConfig::from_file("/nonexistent/container.toml"),
        Err(ConfigError::FileNotFound { .. })
    ));
}
