//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 组件扫描错误类型
///
/// 扫描阶段的任何失败都会终止容器构建
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("扫描路径无效: '{path}'")]
    InvalidScanPath { path: String },

    #[error("扫描路径无法解析: {package}")]
    PackageNotFound { package: String },

    #[error("类不存在: {class_name}")]
    ClassNotFound { class_name: String },

    #[error("类加载失败: {class_name}, 原因: {message}")]
    ClassLoadFailed { class_name: String, message: String },

    #[error("不支持的作用域: {class_name} 声明了 '{scope}'")]
    UnsupportedScope { class_name: String, scope: String },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("未定义bean: {name}")]
    BeanNotDefined { name: String },

    #[error("组件实例化失败: {type_name}, 原因: {source}")]
    InstantiationFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("属性注入失败: {type_name}.{field}, 原因: {message}")]
    InjectionFailed {
        type_name: String,
        field: String,
        message: String,
    },

    #[error("Bean 类型不匹配: 期望 {expected}, 实际 {actual}")]
    BeanTypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("依赖解析深度超过上限 {max_depth}: {chain}")]
    ResolutionDepthExceeded { max_depth: usize, chain: String },

    #[error("代理创建失败: {type_name}, 原因: {message}")]
    ProxyCreationFailed { type_name: String, message: String },

    #[error("应用上下文已不可用")]
    ContextUnavailable,
}

impl DependencyError {
    /// 创建未定义 Bean 错误
    pub fn bean_not_defined(name: impl Into<String>) -> Self {
        Self::BeanNotDefined { name: name.into() }
    }

    /// 是否为未定义 Bean 错误
    pub fn is_bean_not_defined(&self) -> bool {
        matches!(self, Self::BeanNotDefined { .. })
    }
}

/// 容器构建错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("组件扫描失败: {source}")]
    ScanError {
        #[from]
        source: ScanError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ScanResult<T> = Result<T, ScanError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ContainerResult<T> = Result<T, ContainerError>;
