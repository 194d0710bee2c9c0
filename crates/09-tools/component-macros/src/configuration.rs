//! 配置类派生宏实现

use crate::utils::{find_attribute, parse_str_arg};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, Result};

/// 读取 `#[component_scan("...")]`
pub fn component_scan_path(input: &DeriveInput) -> Result<Option<String>> {
    let Some(attr) = find_attribute(&input.attrs, "component_scan") else {
        return Ok(None);
    };

    let path = parse_str_arg(attr)?;
    if path.value().trim().is_empty() {
        return Err(Error::new(path.span(), "组件扫描路径不能为空"));
    }
    Ok(Some(path.value()))
}

/// 实现 #[derive(Configuration)]
pub fn derive_configuration_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let component_scan = match component_scan_path(&input)? {
        Some(path) => quote! { ::core::option::Option::Some(#path) },
        None => quote! { ::core::option::Option::None },
    };

    Ok(quote! {
        impl #impl_generics ::infrastructure_common::ScanConfiguration
            for #struct_name #ty_generics #where_clause
        {
            fn component_scan() -> ::core::option::Option<&'static str> {
                #component_scan
            }
        }
    })
}
