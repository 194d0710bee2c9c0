//! 组件派生宏实现

use crate::utils::{
    expect_flag, field_has_attribute, parse_str_arg, registration_fn_ident, type_last_segment_is,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Meta, Result, Type};

/// 支持的作用域
const SUPPORTED_SCOPES: [&str; 2] = ["singleton", "prototype"];

/// 类型上的组件标记
#[derive(Debug, Default)]
pub struct ComponentArgs {
    /// 组件名称，`Some("")` 表示使用默认命名
    pub name: Option<String>,
    /// 作用域标记
    pub scope: Option<String>,
    /// 懒加载标记
    pub lazy: bool,
    /// 事务标记声明的发布接口
    pub transactional: Option<Type>,
    /// 名称感知
    pub bean_name_aware: bool,
    /// 上下文感知
    pub context_aware: bool,
}

impl ComponentArgs {
    /// 从类型属性解析组件标记
    pub fn from_attributes(input: &DeriveInput) -> Result<Self> {
        let mut args = Self::default();

        for attr in &input.attrs {
            if attr.path().is_ident("component") {
                args.name = Some(parse_component_name(attr)?);
            } else if attr.path().is_ident("scope") {
                let scope = parse_str_arg(attr)?;
                if !SUPPORTED_SCOPES.contains(&scope.value().as_str()) {
                    return Err(Error::new(
                        scope.span(),
                        format!(
                            "不支持的作用域 '{}'，可选值: singleton, prototype",
                            scope.value()
                        ),
                    ));
                }
                args.scope = Some(scope.value());
            } else if attr.path().is_ident("lazy") {
                expect_flag(attr)?;
                args.lazy = true;
            } else if attr.path().is_ident("transactional") {
                let view: Type = attr.parse_args().map_err(|e| {
                    Error::new(
                        e.span(),
                        "事务标记需要声明发布的接口，例如 #[transactional(dyn OrderOps)]",
                    )
                })?;
                if !matches!(view, Type::TraitObject(_)) {
                    return Err(Error::new_spanned(
                        &view,
                        "事务 Bean 只能以 trait object 发布，例如 dyn OrderOps",
                    ));
                }
                args.transactional = Some(view);
            } else if attr.path().is_ident("aware") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("bean_name") {
                        args.bean_name_aware = true;
                        Ok(())
                    } else if meta.path.is_ident("application_context") {
                        args.context_aware = true;
                        Ok(())
                    } else {
                        Err(meta.error("可选值: bean_name, application_context"))
                    }
                })?;
            }
        }

        Ok(args)
    }
}

/// 解析 `#[component]`、`#[component("name")]` 和 `#[component(name = "name")]`
fn parse_component_name(attr: &syn::Attribute) -> Result<String> {
    match &attr.meta {
        Meta::Path(_) => Ok(String::new()),
        Meta::List(list) => {
            if let Ok(name) = syn::parse2::<LitStr>(list.tokens.clone()) {
                return Ok(name.value());
            }

            let mut name = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    name = Some(value.value());
                    Ok(())
                } else {
                    Err(meta.error("可选参数: name"))
                }
            })?;
            Ok(name.unwrap_or_default())
        }
        Meta::NameValue(_) => Err(Error::new_spanned(
            attr,
            "请使用 #[component(\"name\")] 或 #[component(name = \"name\")]",
        )),
    }
}

/// 注入字段
struct AutowiredField {
    ident: Ident,
    name: String,
}

fn autowired_fields(input: &DeriveInput) -> Result<Vec<AutowiredField>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "#[derive(Component)] 只能用于结构体",
            ))
        }
    };

    let fields = match &data.fields {
        Fields::Named(fields) => &fields.named,
        Fields::Unit => return Ok(Vec::new()),
        Fields::Unnamed(fields) => {
            return Err(Error::new_spanned(
                fields,
                "组件需要具名字段，按字段名注入依赖",
            ))
        }
    };

    let mut result = Vec::new();
    for field in fields {
        if !field_has_attribute(field, "autowired") {
            continue;
        }
        if !type_last_segment_is(&field.ty, "Autowired") {
            return Err(Error::new_spanned(
                &field.ty,
                "#[autowired] 字段的类型必须是 Autowired<T>",
            ));
        }
        if let Some(ident) = &field.ident {
            result.push(AutowiredField {
                ident: ident.clone(),
                name: ident.unraw().to_string(),
            });
        }
    }

    Ok(result)
}

/// 实现 #[derive(Component)]
pub fn derive_component_impl(input: DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "组件类型不能带有泛型参数",
        ));
    }

    let args = ComponentArgs::from_attributes(&input)?;
    let fields = autowired_fields(&input)?;
    let struct_name = &input.ident;

    let class_descriptor = generate_class_descriptor(struct_name, &args, &fields);
    let managed_object = generate_managed_object(struct_name, &args, &fields);
    let registration = generate_registration_code(struct_name);

    Ok(quote! {
        #class_descriptor

        #managed_object

        #registration
    })
}

fn generate_class_descriptor(
    struct_name: &Ident,
    args: &ComponentArgs,
    fields: &[AutowiredField],
) -> TokenStream {
    let component = args
        .name
        .as_ref()
        .map(|name| quote! { .with_component(#name) });
    let scope = args.scope.as_ref().map(|scope| quote! { .with_scope(#scope) });
    let lazy = args.lazy.then(|| quote! { .lazy() });
    let transactional = args.transactional.as_ref().map(|_| quote! { .transactional() });
    let autowired = fields.iter().map(|field| {
        let name = &field.name;
        quote! { .with_autowired(#name) }
    });

    quote! {
        impl ::di_abstractions::ComponentClass for #struct_name {
            fn class_descriptor() -> ::di_abstractions::ClassDescriptor {
                ::di_abstractions::ClassDescriptor::new(
                    ::infrastructure_common::TypeInfo::of::<Self>()
                        .with_module_path(::core::module_path!()),
                    ::di_abstractions::instantiate_default::<Self>,
                )
                #component
                #scope
                #lazy
                #transactional
                #(#autowired)*
            }
        }
    }
}

fn generate_managed_object(
    struct_name: &Ident,
    args: &ComponentArgs,
    fields: &[AutowiredField],
) -> TokenStream {
    let inject_arms = fields.iter().map(|field| {
        let ident = &field.ident;
        let name = &field.name;
        quote! { #name => self.#ident.assign(bean), }
    });

    let bean_name_aware = args.bean_name_aware.then(|| {
        quote! {
            fn as_bean_name_aware(
                &mut self,
            ) -> ::core::option::Option<&mut dyn ::di_abstractions::BeanNameAware> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let context_aware = args.context_aware.then(|| {
        quote! {
            fn as_context_aware(
                &mut self,
            ) -> ::core::option::Option<&mut dyn ::di_abstractions::ApplicationContextAware> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let publish = match &args.transactional {
        Some(view) => quote! {
            fn into_bean(self: ::std::boxed::Box<Self>) -> ::infrastructure_common::BeanObject {
                let target: ::std::sync::Arc<#view> = ::std::sync::Arc::<Self>::from(self);
                ::infrastructure_common::BeanObject::new(target)
            }

            fn into_proxy(
                self: ::std::boxed::Box<Self>,
                interceptor: ::std::sync::Arc<dyn ::infrastructure_common::MethodInterceptor>,
            ) -> ::infrastructure_common::DependencyResult<::infrastructure_common::BeanObject> {
                let target: ::std::sync::Arc<#view> = ::std::sync::Arc::<Self>::from(self);
                let proxy: ::std::sync::Arc<#view> = ::std::sync::Arc::new(
                    ::infrastructure_common::Proxy::<#view>::new(target, interceptor),
                );
                ::core::result::Result::Ok(::infrastructure_common::BeanObject::new(proxy))
            }
        },
        None => quote! {
            fn into_bean(self: ::std::boxed::Box<Self>) -> ::infrastructure_common::BeanObject {
                ::infrastructure_common::BeanObject::new(::std::sync::Arc::<Self>::from(self))
            }
        },
    };

    // 没有注入字段时参数不会被使用
    let bean_param = if fields.is_empty() {
        quote! { _bean }
    } else {
        quote! { bean }
    };

    quote! {
        impl ::di_abstractions::ManagedObject for #struct_name {
            fn inject(
                &mut self,
                field: &str,
                #bean_param: &::infrastructure_common::BeanObject,
            ) -> ::infrastructure_common::DependencyResult<()> {
                match field {
                    #(#inject_arms)*
                    other => ::core::result::Result::Err(
                        ::infrastructure_common::DependencyError::InjectionFailed {
                            type_name: ::core::any::type_name::<Self>().to_string(),
                            field: other.to_string(),
                            message: "字段没有 #[autowired] 标记".to_string(),
                        },
                    ),
                }
            }

            #bean_name_aware

            #context_aware

            #publish
        }
    }
}

/// 生成组件自动登记代码
fn generate_registration_code(struct_name: &Ident) -> TokenStream {
    let registration_fn_name = registration_fn_ident(struct_name);

    quote! {
        // 使用 ctor 在程序启动时登记到全局类路径
        #[ctor::ctor]
        fn #registration_fn_name() {
            ::di_abstractions::ClassPath::global().register_class::<#struct_name>();
        }
    }
}
