//! 宏工具函数

use proc_macro2::Span;
use syn::{Attribute, Error, Field, Ident, LitStr, Meta, Result, Type};

/// 将驼峰命名转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            // 检查前一个字符是否为小写，或者下一个字符是否为小写
            let prev_is_lower = chars.get(i - 1).map_or(false, |c| c.is_lowercase());
            let next_is_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());

            if prev_is_lower || next_is_lower {
                result.push('_');
            }
        }
        result.extend(ch.to_lowercase());
    }

    result
}

/// 生成组件登记函数名
pub fn registration_fn_ident(struct_name: &Ident) -> Ident {
    Ident::new(
        &format!("__register_component_{}", to_snake_case(&struct_name.to_string())),
        Span::call_site(),
    )
}

/// 查找指定名称的属性
pub fn find_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

/// 属性是否为不带参数的标记，例如 `#[lazy]`
pub fn expect_flag(attr: &Attribute) -> Result<()> {
    match &attr.meta {
        Meta::Path(_) => Ok(()),
        _ => Err(Error::new_spanned(attr, "该标记不接受参数")),
    }
}

/// 解析 `#[attr("value")]` 形式的字符串参数
pub fn parse_str_arg(attr: &Attribute) -> Result<LitStr> {
    match &attr.meta {
        Meta::List(_) => attr.parse_args::<LitStr>(),
        _ => Err(Error::new_spanned(attr, "需要一个字符串参数")),
    }
}

/// 字段类型的最后一段是否为指定名称，例如 `Autowired<T>`
pub fn type_last_segment_is(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == name),
        _ => false,
    }
}

/// 字段是否带有指定属性
pub fn field_has_attribute(field: &Field, name: &str) -> bool {
    find_attribute(&field.attrs, name).is_some()
}
