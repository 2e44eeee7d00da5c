use crate::props::StyleProps;
use breeze_core::{render_rule, Breakpoint, Declaration, ResolvedRule, Responsive, StyleResolver};
use std::fmt::Display;

/// 样式构建器
///
/// 依次解析多个属性，结果既可以拼成一段 CSS 文本（插入到样式模板中），
/// 也可以交给 [`RuleContext`](crate::RuleContext) 生成完整的类规则
pub struct StyleBuilder<'r> {
    resolver: &'r StyleResolver,
    rules: Vec<ResolvedRule>,
}

impl<'r> StyleBuilder<'r> {
    pub fn new(resolver: &'r StyleResolver) -> Self {
        Self {
            resolver,
            rules: Vec::new(),
        }
    }

    pub fn resolver(&self) -> &'r StyleResolver {
        self.resolver
    }

    /// 解析一个响应式属性；`None` 和空映射不产生任何输出
    pub fn prop<T: Display>(&mut self, property: &str, value: Option<&Responsive<T>>) -> &mut Self {
        if let Some(value) = value {
            self.rules.extend(self.resolver.resolve_rules(property, value));
        }
        self
    }

    /// 写入一条固定声明（不查主题）
    pub fn declare(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.rules.push(ResolvedRule {
            breakpoint: Breakpoint::Base,
            declaration: Declaration::new(property, value),
        });
        self
    }

    pub fn props(&mut self, props: &impl StyleProps) -> &mut Self {
        props.apply(self);
        self
    }

    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<ResolvedRule> {
        self.rules
    }

    /// 按写入顺序输出，每条规则一行
    pub fn finish(&self) -> String {
        let breakpoints = self.resolver.breakpoints();
        self.rules
            .iter()
            .map(|rule| render_rule(rule, breakpoints))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeze_core::{ResponsiveMap, Theme};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_single_prop_resolution() {
        let resolver = StyleResolver::default();
        let value: Responsive<String> = ResponsiveMap::new()
            .with(Breakpoint::Sm, "row")
            .with(Breakpoint::Base, "column")
            .into();

        let mut builder = StyleBuilder::new(&resolver);
        builder.prop("flex-direction", Some(&value));

        assert_eq!(
            Some(builder.finish()),
            resolver.resolve("flex-direction", Some(&value))
        );
    }

    #[test]
    fn test_declare_and_props() {
        let theme = Theme::from_json(r##"{ "colors": { "primary": "#3f51b5" } }"##).unwrap();
        let resolver = StyleResolver::new(Some(theme));

        let color: Responsive<String> = "primary".into();
        let mut builder = StyleBuilder::new(&resolver);
        builder
            .declare("display", "flex")
            .prop("color", Some(&color))
            .prop::<String>("background-color", None);

        assert_eq!(builder.finish(), "display: flex;\ncolor: #3f51b5;");
        assert_eq!(builder.rules().len(), 2);
    }

    #[test]
    fn test_empty_builder() {
        let resolver = StyleResolver::default();
        let builder = StyleBuilder::new(&resolver);
        assert!(builder.is_empty());
        assert_eq!(builder.finish(), "");
    }
}
