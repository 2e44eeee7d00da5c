use crate::builder::StyleBuilder;
use crate::context::RuleContext;
use crate::naming::{create_naming_strategy, NamingMode, NamingStrategy};
use crate::props::StyleProps;
use breeze_core::{BreakpointTable, StyleResolver};
use indexmap::IndexMap;

/// 样式表：按生成的类名登记规则
///
/// 内容相同的规则得到相同的类名，只登记一次
pub struct StyleSheet {
    naming: Box<dyn NamingStrategy>,
    breakpoints: BreakpointTable,
    rules: IndexMap<String, RuleContext>,
}

impl StyleSheet {
    pub fn new(naming_mode: NamingMode, breakpoints: BreakpointTable) -> Self {
        Self {
            naming: create_naming_strategy(naming_mode),
            breakpoints,
            rules: IndexMap::new(),
        }
    }

    /// 使用解析器的断点表
    pub fn for_resolver(naming_mode: NamingMode, resolver: &StyleResolver) -> Self {
        Self::new(naming_mode, resolver.breakpoints().clone())
    }

    /// 登记一条规则，返回类名
    ///
    /// 空规则只返回类名，不登记，也不出现在样式表中
    pub fn insert(&mut self, context: RuleContext) -> String {
        let mut class_name = self.naming.generate_name(&context);

        if context.is_empty() {
            tracing::trace!(class = class_name.as_str(), "skipping empty rule");
            return class_name;
        }

        if let Some(existing) = self.rules.get(&class_name) {
            if *existing == context {
                tracing::trace!(class = class_name.as_str(), "reusing existing rule");
                return class_name;
            }
            // Readable 命名可能冲突：追加内容 hash
            let hex = blake3::hash(context.fingerprint().as_bytes()).to_hex();
            tracing::debug!(class = class_name.as_str(), "class name collision, adding hash suffix");
            class_name = format!("{}_{}", class_name, &hex[..6]);
        }

        self.rules.entry(class_name.clone()).or_insert(context);
        class_name
    }

    /// 解析一组 props 并登记为类
    pub fn class_for(&mut self, resolver: &StyleResolver, props: &impl StyleProps) -> String {
        let mut builder = StyleBuilder::new(resolver);
        builder.props(props);
        self.insert(RuleContext::from_rules(builder.into_rules()))
    }

    pub fn get(&self, class_name: &str) -> Option<&RuleContext> {
        self.rules.get(class_name)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按登记顺序生成整张样式表
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|(class_name, context)| context.to_css(class_name, &self.breakpoints, "  "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new(NamingMode::Hash, BreakpointTable::default())
    }
}
