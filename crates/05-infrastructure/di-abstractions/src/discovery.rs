//! 类路径与类加载抽象
//!
//! 组件类型在编译时生成 [`ClassDescriptor`]，程序启动时登记到类路径中，
//! 扫描器再按包路径从类路径加载候选类型

use crate::factory::ManagedObject;
use infrastructure_common::{
    DependencyResult, NamingConventions, ScanError, ScanResult, TypeInfo,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// 实例化函数类型
///
/// 相当于零参数构造函数
pub type InstantiateFn = fn() -> DependencyResult<Box<dyn ManagedObject>>;

/// 组件标记
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMarker {
    /// 显式指定的 Bean 名称，空字符串表示使用默认命名
    pub name: String,
}

/// 注入点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPoint {
    /// 字段标识符
    pub field: String,
    /// 按命名约定得到的目标 Bean 名称
    pub bean_name: String,
}

impl InjectionPoint {
    /// 候选 Bean 名称：先是字段标识符本身，再是按命名约定转换后的名称
    pub fn candidate_names(&self) -> impl Iterator<Item = &str> {
        let converted = (self.bean_name != self.field).then_some(self.bean_name.as_str());
        std::iter::once(self.field.as_str()).chain(converted)
    }
}

/// 类描述符
///
/// 记录一个类型上的全部标记，以及创建其实例的方式
#[derive(Clone)]
pub struct ClassDescriptor {
    type_info: TypeInfo,
    component: Option<ComponentMarker>,
    scope: Option<String>,
    lazy: bool,
    transactional: bool,
    injection_points: Vec<InjectionPoint>,
    instantiate: InstantiateFn,
}

impl ClassDescriptor {
    /// 创建新的类描述符（不带任何标记）
    pub fn new(type_info: TypeInfo, instantiate: InstantiateFn) -> Self {
        Self {
            type_info,
            component: None,
            scope: None,
            lazy: false,
            transactional: false,
            injection_points: Vec::new(),
            instantiate,
        }
    }

    /// 添加组件标记
    pub fn with_component(mut self, name: impl Into<String>) -> Self {
        self.component = Some(ComponentMarker { name: name.into() });
        self
    }

    /// 添加作用域标记
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// 添加懒加载标记
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    /// 添加事务标记
    pub fn transactional(mut self) -> Self {
        self.transactional = true;
        self
    }

    /// 添加注入点
    pub fn with_autowired(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        let bean_name = NamingConventions::field_bean_name(&field);
        self.injection_points.push(InjectionPoint { field, bean_name });
        self
    }

    /// 类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 全限定名
    pub fn class_name(&self) -> String {
        self.type_info.qualified_name()
    }

    /// 组件标记
    pub fn component(&self) -> Option<&ComponentMarker> {
        self.component.as_ref()
    }

    /// 作用域标记值
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// 是否带有懒加载标记
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// 是否带有事务标记
    pub fn is_transactional(&self) -> bool {
        self.transactional
    }

    /// 注入点列表
    pub fn injection_points(&self) -> &[InjectionPoint] {
        &self.injection_points
    }

    /// 创建未注入的实例
    pub fn instantiate(&self) -> DependencyResult<Box<dyn ManagedObject>> {
        (self.instantiate)()
    }
}

impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("type_info", &self.type_info)
            .field("component", &self.component)
            .field("scope", &self.scope)
            .field("lazy", &self.lazy)
            .field("transactional", &self.transactional)
            .field("injection_points", &self.injection_points)
            .field("instantiate", &"<function>")
            .finish()
    }
}

/// 可登记到类路径的组件类型
///
/// 通常由 `#[derive(Component)]` 生成
pub trait ComponentClass: ManagedObject + Sized {
    /// 获取类描述符
    fn class_descriptor() -> ClassDescriptor;
}

/// 类加载器 trait
pub trait ClassLoader: Send + Sync {
    /// 列出包中直接包含的类（不递归子包），按全限定名排序
    fn list_classes(&self, package: &str) -> ScanResult<Vec<String>>;

    /// 按全限定名加载类
    fn load_class(&self, class_name: &str) -> ScanResult<ClassDescriptor>;
}

static GLOBAL_CLASS_PATH: Lazy<ClassPath> = Lazy::new(ClassPath::new);

/// 类路径
///
/// 按全限定名保存类描述符
#[derive(Debug, Default)]
pub struct ClassPath {
    classes: RwLock<BTreeMap<String, ClassDescriptor>>,
}

impl ClassPath {
    /// 创建空的类路径
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取全局类路径
    ///
    /// `#[derive(Component)]` 生成的类型在程序启动时登记到这里
    pub fn global() -> &'static ClassPath {
        &GLOBAL_CLASS_PATH
    }

    /// 登记类描述符，同名类后登记者覆盖先登记者
    pub fn register(&self, descriptor: ClassDescriptor) {
        let class_name = descriptor.class_name();
        debug!("登记类: {}", class_name);
        self.classes.write().insert(class_name, descriptor);
    }

    /// 登记组件类型
    pub fn register_class<T: ComponentClass>(&self) {
        self.register(T::class_descriptor());
    }

    /// 是否包含指定类
    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.read().contains_key(class_name)
    }

    /// 已登记类的数量
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }
}

impl ClassLoader for ClassPath {
    fn list_classes(&self, package: &str) -> ScanResult<Vec<String>> {
        let classes = self.classes.read();
        let nested_prefix = format!("{package}::");

        let mut package_exists = false;
        let mut direct = Vec::new();
        for (class_name, descriptor) in classes.iter() {
            let module_path = descriptor.type_info().module_path.as_str();
            if module_path == package {
                package_exists = true;
                direct.push(class_name.clone());
            } else if module_path.starts_with(&nested_prefix) {
                package_exists = true;
            }
        }

        if !package_exists {
            return Err(ScanError::PackageNotFound {
                package: package.to_string(),
            });
        }

        Ok(direct)
    }

    fn load_class(&self, class_name: &str) -> ScanResult<ClassDescriptor> {
        self.classes
            .read()
            .get(class_name)
            .cloned()
            .ok_or_else(|| ScanError::ClassNotFound {
                class_name: class_name.to_string(),
            })
    }
}

/// 全局类路径的类加载器
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalClassLoader;

impl ClassLoader for GlobalClassLoader {
    fn list_classes(&self, package: &str) -> ScanResult<Vec<String>> {
        ClassPath::global().list_classes(package)
    }

    fn load_class(&self, class_name: &str) -> ScanResult<ClassDescriptor> {
        ClassPath::global().load_class(class_name)
    }
}
