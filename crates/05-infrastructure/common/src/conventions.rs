//! 约定规范定义
//!
//! 提供 Bean 命名和扫描路径的约定规范

use crate::errors::ScanError;

/// 命名约定规范
#[derive(Debug)]
pub struct NamingConventions;

impl NamingConventions {
    /// 根据类型名称生成默认 Bean 名称
    ///
    /// 首字母小写，其余保持不变：`OrderService` -> `orderService`。
    /// 前两个字符都是大写时原样保留：`URLService` -> `URLService`
    pub fn default_bean_name(simple_name: &str) -> String {
        let mut chars = simple_name.chars();
        match (chars.next(), chars.next()) {
            (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
                simple_name.to_string()
            }
            (Some(first), _) => first.to_lowercase().chain(simple_name.chars().skip(1)).collect(),
            (None, _) => String::new(),
        }
    }

    /// 将字段标识符转换为注入所用的 Bean 名称
    ///
    /// 蛇形命名转为驼峰命名：`user_service` -> `userService`
    pub fn field_bean_name(field: &str) -> String {
        let field = field.strip_prefix("r#").unwrap_or(field);
        let mut result = String::with_capacity(field.len());
        let mut capitalize_next = false;

        for ch in field.chars() {
            if ch == '_' {
                // 前导下划线保留
                if result.is_empty() {
                    result.push(ch);
                } else {
                    capitalize_next = true;
                }
            } else if capitalize_next {
                result.extend(ch.to_uppercase());
                capitalize_next = false;
            } else {
                result.push(ch);
            }
        }

        result
    }
}

/// 扫描路径约定规范
#[derive(Debug)]
pub struct ScanPathConventions;

impl ScanPathConventions {
    /// 将扫描路径描述规范化为模块路径
    ///
    /// 接受 `.`、`/` 或 `::` 分隔：`example-app.service` -> `example_app::service`
    pub fn normalize(path: &str) -> Result<String, ScanError> {
        let unified = path.trim().replace("::", "/").replace('.', "/");
        let segments: Vec<&str> = unified
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(ScanError::InvalidScanPath {
                path: path.to_string(),
            });
        }

        let mut normalized = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            // crate 名称中的 '-' 在模块路径中为 '_'
            let segment = if index == 0 {
                segment.replace('-', "_")
            } else {
                segment.to_string()
            };

            if !Self::is_valid_segment(&segment) {
                return Err(ScanError::InvalidScanPath {
                    path: path.to_string(),
                });
            }
            normalized.push(segment);
        }

        Ok(normalized.join("::"))
    }

    fn is_valid_segment(segment: &str) -> bool {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' => {
                chars.all(|ch| ch.is_alphanumeric() || ch == '_')
            }
            _ => false,
        }
    }
}
