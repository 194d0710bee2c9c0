//! 容器配置定义

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 默认最大解析深度
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 100;

/// 最大解析深度的上限
///
/// 解析在当前线程上递归进行，深度过大时会先耗尽栈空间
pub const RESOLUTION_DEPTH_LIMIT: usize = 512;

/// 扫描配置 trait
///
/// 相当于带有组件扫描标记的配置类，通常由 `#[derive(Configuration)]` 生成
pub trait ScanConfiguration {
    /// 组件扫描路径，没有扫描标记时为 `None`
    fn component_scan() -> Option<&'static str>;
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 组件扫描路径
    pub component_scan: Option<String>,
    /// 最大解析深度
    pub max_resolution_depth: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            component_scan: None,
            max_resolution_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

impl ContainerConfig {
    /// 创建扫描指定包的配置
    pub fn for_package(path: impl Into<String>) -> Self {
        Self {
            component_scan: Some(path.into()),
            ..Self::default()
        }
    }

    /// 从配置类型创建配置
    pub fn from_configuration<C: ScanConfiguration>() -> Self {
        Self {
            component_scan: C::component_scan().map(str::to_string),
            ..Self::default()
        }
    }

    /// 从 TOML 文本解析配置
    ///
    /// 容器配置位于 `[container]` 节中
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct Document {
            container: ContainerConfig,
        }

        let document: Document = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;

        document.container.validate()?;
        Ok(document.container)
    }

    /// 从 TOML 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        debug!("加载容器配置文件: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 使用环境变量覆盖配置
    ///
    /// 读取 `{PREFIX}_COMPONENT_SCAN` 和 `{PREFIX}_MAX_RESOLUTION_DEPTH`
    pub fn with_env_overrides(self, prefix: &str) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(format!("{prefix}_{key}")).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(scan) = lookup("COMPONENT_SCAN") {
            debug!("环境变量覆盖扫描路径: {}", scan);
            self.component_scan = Some(scan);
        }

        if let Some(depth) = lookup("MAX_RESOLUTION_DEPTH") {
            self.max_resolution_depth =
                depth.trim().parse().map_err(|_| ConfigError::ValidationError {
                    message: format!("max_resolution_depth 不是有效的整数: {depth}"),
                })?;
        }

        self.validate()?;
        Ok(self)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_resolution_depth == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_resolution_depth 必须大于 0".to_string(),
            });
        }
        if self.max_resolution_depth > RESOLUTION_DEPTH_LIMIT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_resolution_depth 不能超过 {RESOLUTION_DEPTH_LIMIT}: {}",
                    self.max_resolution_depth
                ),
            });
        }
        Ok(())
    }
}
