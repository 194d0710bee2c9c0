//! Bean 实例句柄
//!
//! 容器内的 Bean 以类型擦除的方式保存，使用方按发布的视图类型取回

use crate::errors::DependencyError;
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// 类型擦除的 Bean 句柄
///
/// 内部保存一个 `Arc<V>`，`V` 是 Bean 发布的视图类型，可以是具体类型，
/// 也可以是 trait object（例如被代理的 `dyn OrderOps`）。克隆句柄不会复制实例。
#[derive(Clone)]
pub struct BeanObject {
    inner: Arc<dyn Any + Send + Sync>,
    view_type: &'static str,
}

impl BeanObject {
    /// 以视图类型 `V` 发布实例
    pub fn new<V>(instance: Arc<V>) -> Self
    where
        V: ?Sized + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(instance),
            view_type: std::any::type_name::<V>(),
        }
    }

    /// 发布的视图类型名称
    pub fn view_type(&self) -> &'static str {
        self.view_type
    }

    /// 按视图类型取回实例
    pub fn downcast<V>(&self) -> Result<Arc<V>, DependencyError>
    where
        V: ?Sized + Send + Sync + 'static,
    {
        self.inner
            .downcast_ref::<Arc<V>>()
            .cloned()
            .ok_or(DependencyError::BeanTypeMismatch {
                expected: std::any::type_name::<V>(),
                actual: self.view_type,
            })
    }

    /// 是否以视图类型 `V` 发布
    pub fn is<V>(&self) -> bool
    where
        V: ?Sized + Send + Sync + 'static,
    {
        self.inner.is::<Arc<V>>()
    }

    /// 两个句柄是否指向同一个实例
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for BeanObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanObject")
            .field("view_type", &self.view_type)
            .finish_non_exhaustive()
    }
}

/// 按名称注入的字段
///
/// 字段在实例创建后、发布前由注入器赋值。容器只会发布已完成注入的实例，
/// 因此通过容器获得的 Bean 上解引用总是安全的。
pub struct Autowired<V: ?Sized> {
    bean: Option<Arc<V>>,
}

impl<V: ?Sized> Autowired<V> {
    /// 创建未注入的字段
    pub const fn empty() -> Self {
        Self { bean: None }
    }

    /// 直接以实例创建（用于手动装配）
    pub fn of(bean: Arc<V>) -> Self {
        Self { bean: Some(bean) }
    }

    /// 是否已完成注入
    pub fn is_injected(&self) -> bool {
        self.bean.is_some()
    }

    /// 获取注入的实例
    pub fn get(&self) -> Option<&Arc<V>> {
        self.bean.as_ref()
    }
}

impl<V> Autowired<V>
where
    V: ?Sized + Send + Sync + 'static,
{
    /// 注入 Bean
    pub fn assign(&mut self, bean: &BeanObject) -> Result<(), DependencyError> {
        self.bean = Some(bean.downcast::<V>()?);
        Ok(())
    }
}

impl<V: ?Sized> Default for Autowired<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: ?Sized> Clone for Autowired<V> {
    fn clone(&self) -> Self {
        Self {
            bean: self.bean.clone(),
        }
    }
}

impl<V: ?Sized> Deref for Autowired<V> {
    type Target = V;

    /// # Panics
    ///
    /// 在注入完成前解引用会 panic
    fn deref(&self) -> &V {
        match &self.bean {
            Some(bean) => bean,
            None => panic!(
                "Autowired<{}> 在注入完成前被访问",
                std::any::type_name::<V>()
            ),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Autowired<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<V>();
        let type_name = type_name.rsplit("::").next().unwrap_or(type_name);
        match &self.bean {
            Some(bean) => write!(f, "{}@{:p}", type_name, Arc::as_ptr(bean).cast::<()>()),
            None => write!(f, "{}@<未注入>", type_name),
        }
    }
}
