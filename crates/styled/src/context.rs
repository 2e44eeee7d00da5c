use breeze_core::{Breakpoint, BreakpointTable, Declaration, ResolvedRule};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// 类规则上下文 - 收集某个 CSS 类在各断点下的所有声明
///
/// 同一断点下同名属性后者覆盖前者，位置保持首次出现的位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleContext {
    /// breakpoint -> (property -> value)
    groups: BTreeMap<Breakpoint, IndexMap<String, String>>,
}

impl RuleContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: impl IntoIterator<Item = ResolvedRule>) -> Self {
        let mut context = Self::new();
        context.extend(rules);
        context
    }

    /// 写入声明到指定断点
    pub fn write(&mut self, breakpoint: Breakpoint, declarations: Vec<Declaration>) {
        let group = self.groups.entry(breakpoint).or_default();
        for decl in declarations {
            group.insert(decl.property, decl.value);
        }
    }

    pub fn extend(&mut self, rules: impl IntoIterator<Item = ResolvedRule>) {
        for rule in rules {
            self.write(rule.breakpoint, vec![rule.declaration]);
        }
    }

    pub fn declarations(&self, breakpoint: Breakpoint) -> Vec<Declaration> {
        self.groups
            .get(&breakpoint)
            .map(|group| {
                group
                    .iter()
                    .map(|(property, value)| Declaration::new(property.as_str(), value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(|group| group.is_empty())
    }

    /// 内容指纹：与类名无关，用于命名和去重
    ///
    /// 形如 `base{margin:8px;}md{margin:16px;}`
    pub fn fingerprint(&self) -> String {
        let mut out = String::new();
        for (breakpoint, group) in self.non_empty_groups() {
            out.push_str(breakpoint.name());
            out.push('{');
            for (property, value) in group {
                out.push_str(&format!("{}:{};", property, value));
            }
            out.push('}');
        }
        out
    }

    /// 生成 CSS 字符串
    ///
    /// ```css
    /// .c_1a2b3c {
    ///   margin: 8px;
    /// }
    /// @media screen and (min-width: 768px) {
    ///   .c_1a2b3c {
    ///     margin: 16px;
    ///   }
    /// }
    /// ```
    pub fn to_css(&self, class_name: &str, breakpoints: &BreakpointTable, indent: &str) -> String {
        let mut css = String::new();

        for (breakpoint, group) in self.non_empty_groups() {
            match breakpoints.media_query(breakpoint) {
                None => write_block(&mut css, class_name, group, "", indent),
                Some(media) => {
                    css.push_str(&format!("{} {{\n", media));
                    write_block(&mut css, class_name, group, indent, indent);
                    css.push_str("}\n");
                }
            }
        }

        css
    }

    fn non_empty_groups(&self) -> impl Iterator<Item = (Breakpoint, &IndexMap<String, String>)> {
        self.groups
            .iter()
            .filter(|(_, group)| !group.is_empty())
            .map(|(breakpoint, group)| (*breakpoint, group))
    }
}

fn write_block(
    css: &mut String,
    class_name: &str,
    group: &IndexMap<String, String>,
    outer: &str,
    indent: &str,
) {
    css.push_str(&format!("{}.{} {{\n", outer, class_name));
    for (property, value) in group {
        css.push_str(&format!("{}{}{}: {};\n", outer, indent, property, value));
    }
    css.push_str(&format!("{}}}\n", outer));
}
