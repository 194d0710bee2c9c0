//! 可拦截接口宏实现
//!
//! 为 trait 生成 `impl Trait for Proxy<dyn Trait>`，每个方法经拦截器转发给被代理实例

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Error, FnArg, Ident, ItemTrait, Pat, PatIdent, Result, TraitItem, TraitItemFn};

/// 实现 #[interceptable]
pub fn interceptable_impl(args: TokenStream, item: ItemTrait) -> Result<TokenStream> {
    if !args.is_empty() {
        return Err(Error::new_spanned(args, "#[interceptable] 不接受参数"));
    }
    if !item.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &item.generics,
            "可拦截接口不能带有泛型参数",
        ));
    }

    let trait_name = &item.ident;
    let mut forwarded = Vec::new();

    for trait_item in &item.items {
        match trait_item {
            TraitItem::Fn(method) => forwarded.push(forward_method(method)?),
            other => {
                return Err(Error::new_spanned(
                    other,
                    "可拦截接口只能包含方法",
                ))
            }
        }
    }

    Ok(quote! {
        #item

        impl #trait_name for ::infrastructure_common::Proxy<dyn #trait_name> {
            #(#forwarded)*
        }
    })
}

/// 生成一个转发方法
fn forward_method(method: &TraitItemFn) -> Result<TokenStream> {
    let sig = &method.sig;

    if sig.asyncness.is_some() {
        return Err(Error::new_spanned(sig, "可拦截方法不能是 async"));
    }
    if sig.generics.type_params().next().is_some() || sig.generics.const_params().next().is_some() {
        return Err(Error::new_spanned(
            &sig.generics,
            "可拦截方法不能带有类型或常量泛型参数",
        ));
    }
    if sig.generics.where_clause.is_some() {
        return Err(Error::new_spanned(
            &sig.generics.where_clause,
            "可拦截方法不支持 where 子句",
        ));
    }

    match sig.inputs.first() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none() => {}
        _ => {
            return Err(Error::new_spanned(
                sig,
                "可拦截方法的接收者必须是 &self",
            ))
        }
    }

    // 参数统一改名，避免模式参数无法直接转发
    let mut forwarded_sig = sig.clone();
    let mut arg_names = Vec::new();
    for (index, input) in forwarded_sig.inputs.iter_mut().skip(1).enumerate() {
        if let FnArg::Typed(pat_type) = input {
            let name = Ident::new(&format!("__arg{index}"), Span::call_site());
            pat_type.attrs.clear();
            *pat_type.pat = Pat::Ident(PatIdent {
                attrs: Vec::new(),
                by_ref: None,
                mutability: None,
                ident: name.clone(),
                subpat: None,
            });
            arg_names.push(name);
        }
    }

    let method_name = &sig.ident;
    let method_label = method_name.to_string();

    Ok(quote! {
        #forwarded_sig {
            self.invoke(#method_label, |__target| __target.#method_name(#(#arg_names),*))
        }
    })
}
