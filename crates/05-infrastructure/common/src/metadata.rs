//! 元数据定义
//!
//! 提供类型和 Bean 作用域的元数据信息

use std::any::TypeId;
use std::fmt;
use std::str::FromStr;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称（不含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 模块路径，即类型所在的包
    pub module_path: String,
}

impl TypeInfo {
    /// 创建新的类型信息
    pub fn new(type_id: TypeId, name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: type_id,
            module_path: module_path.into(),
        }
    }

    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        let (module_path, name) = match full_name.rsplit_once("::") {
            Some((module_path, name)) => (module_path, name),
            None => ("", full_name),
        };

        Self {
            name: name.to_string(),
            id: TypeId::of::<T>(),
            module_path: module_path.to_string(),
        }
    }

    /// 覆盖模块路径
    ///
    /// `type_name` 的输出不保证稳定，宏生成的代码用 `module_path!()` 固定它
    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = module_path.into();
        self
    }

    /// 获取全限定名
    pub fn qualified_name(&self) -> String {
        if self.module_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.module_path, self.name)
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }
}

/// Bean 作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BeanScope {
    /// 单例 - 容器生命周期内共享同一个实例
    #[default]
    Singleton,
    /// 原型 - 每次解析都创建新实例
    Prototype,
}

impl BeanScope {
    /// 作用域标记值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Prototype => "prototype",
        }
    }
}

impl fmt::Display for BeanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的作用域标记
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScope(pub String);

impl FromStr for BeanScope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "singleton" => Ok(Self::Singleton),
            "prototype" => Ok(Self::Prototype),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}
