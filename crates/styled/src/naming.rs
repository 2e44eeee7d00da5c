use crate::context::RuleContext;
use breeze_core::Breakpoint;
use serde::{Deserialize, Serialize};

/// 命名策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingMode {
    /// 基于内容 hash
    #[default]
    Hash,
    /// 调试友好（如 "margin8px_colorprim"）
    Readable,
}

/// 命名策略 trait
pub trait NamingStrategy {
    fn generate_name(&self, context: &RuleContext) -> String;
}

/// Hash 命名策略：基于声明内容生成稳定 hash
pub struct HashNaming;

impl NamingStrategy for HashNaming {
    fn generate_name(&self, context: &RuleContext) -> String {
        let hash = blake3::hash(context.fingerprint().as_bytes());

        // 取前 6 个字节的十六进制表示
        let hex = hash.to_hex();
        format!("c_{}", &hex[..12])
    }
}

/// Readable 命名策略：由 base 断点下的声明组合出可读名称
pub struct ReadableNaming;

impl ReadableNaming {
    /// "margin: 8px" → "margin8p"，只保留 ASCII 字母数字，最多 8 个字符
    fn extract_prefix(property: &str, value: &str) -> String {
        property
            .chars()
            .chain(value.chars())
            .filter(|c| c.is_ascii_alphanumeric())
            .take(8)
            .collect()
    }
}

impl NamingStrategy for ReadableNaming {
    fn generate_name(&self, context: &RuleContext) -> String {
        let prefixes: Vec<String> = context
            .declarations(Breakpoint::Base)
            .iter()
            .map(|decl| Self::extract_prefix(&decl.property, &decl.value))
            .filter(|prefix| !prefix.is_empty())
            .collect();

        if prefixes.is_empty() {
            return "empty".to_string();
        }

        let combined = prefixes.join("_");

        // 过长或只有部分断点参与命名时，追加 hash 后缀避免冲突
        let only_base = context.fingerprint().starts_with("base{")
            && context.fingerprint().matches('{').count() == 1;
        if combined.len() > 32 || !only_base {
            let truncated = &combined[..combined.len().min(24)];
            let hex = blake3::hash(context.fingerprint().as_bytes()).to_hex();
            format!("{}_{}", truncated, &hex[..6])
        } else {
            combined
        }
    }
}

/// 根据 NamingMode 创建对应的策略
pub fn create_naming_strategy(mode: NamingMode) -> Box<dyn NamingStrategy> {
    match mode {
        NamingMode::Hash => Box::new(HashNaming),
        NamingMode::Readable => Box::new(ReadableNaming),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeze_core::{Declaration, ResolvedRule};

    fn context(rules: &[(Breakpoint, &str, &str)]) -> RuleContext {
        RuleContext::from_rules(rules.iter().map(|(breakpoint, property, value)| ResolvedRule {
            breakpoint: *breakpoint,
            declaration: Declaration::new(*property, *value),
        }))
    }

    #[test]
    fn test_equal_contexts_get_equal_hash_names() {
        let first = context(&[
            (Breakpoint::Base, "margin", "8px"),
            (Breakpoint::Md, "margin", "16px"),
        ]);
        let second = context(&[
            (Breakpoint::Md, "margin", "16px"),
            (Breakpoint::Base, "margin", "8px"),
        ]);

        let name = HashNaming.generate_name(&first);
        assert_eq!(name, HashNaming.generate_name(&second));
        assert_eq!(&name[..2], "c_");
        assert_eq!(name.len(), 2 + 12);
        assert!(name[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_breakpoint_changes_hash_name() {
        let base = context(&[(Breakpoint::Base, "margin", "8px")]);
        let small = context(&[(Breakpoint::Sm, "margin", "8px")]);

        assert_ne!(HashNaming.generate_name(&base), HashNaming.generate_name(&small));
    }

    #[test]
    fn test_readable_name_from_base_declarations() {
        let ctx = context(&[
            (Breakpoint::Base, "margin", "8px"),
            (Breakpoint::Base, "color", "red"),
        ]);
        assert_eq!(ReadableNaming.generate_name(&ctx), "margin8p_colorred");
    }

    #[test]
    fn test_readable_name_with_media_group_has_hash_suffix() {
        let ctx = context(&[
            (Breakpoint::Base, "margin", "8px"),
            (Breakpoint::Md, "margin", "16px"),
        ]);
        let name = ReadableNaming.generate_name(&ctx);
        assert_eq!(&name[..9], "margin8p_");
        assert_eq!(name.len(), 9 + 6);
    }

    #[test]
    fn test_readable_name_is_bounded() {
        let ctx = context(&[
            (Breakpoint::Base, "padding", "8px"),
            (Breakpoint::Base, "margin", "8px"),
            (Breakpoint::Base, "color", "#3f51b5"),
            (Breakpoint::Base, "background-color", "white"),
            (Breakpoint::Base, "line-height", "1.5"),
        ]);
        let name = ReadableNaming.generate_name(&ctx);
        assert_eq!(name.len(), 24 + 1 + 6);
    }

    #[test]
    fn test_readable_name_for_empty_context() {
        assert_eq!(ReadableNaming.generate_name(&RuleContext::new()), "empty");
    }
}
