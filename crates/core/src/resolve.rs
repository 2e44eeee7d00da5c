//! Responsive value → CSS text
//!
//! 把响应式值（标量或按断点的映射）和可选主题转换为 CSS 声明文本：
//!
//! ```text
//! to_prop_value("margin", { base: "1", sm: "2" })
//!   → "margin: 1;\n@media screen and (min-width: 640px) {margin: 2;}"
//! ```

use crate::breakpoint::{Breakpoint, BreakpointTable};
use crate::category::PropertyCategories;
use crate::config::ResolverConfig;
use crate::error::ConfigError;
use crate::responsive::Responsive;
use crate::theme::Theme;
use crate::types::{Declaration, ResolvedRule};
use std::fmt::Display;
use std::sync::LazyLock;

/// 自由函数共用的默认配置
static DEFAULT_BREAKPOINT_TABLE: LazyLock<BreakpointTable> = LazyLock::new(BreakpointTable::default);
static DEFAULT_CATEGORIES: LazyLock<PropertyCategories> = LazyLock::new(PropertyCategories::new);

/// 使用默认断点和默认属性分类解析响应式值
///
/// - `prop` 为 `None` 或空映射时返回 `None`
/// - 标量输出 `"<prop_key>: <value>;"`
/// - 映射按 base, sm, md, lg, xl 的顺序输出，非 base 包裹在 `@media` 中，以 `\n` 连接
pub fn to_prop_value<T: Display>(
    prop_key: &str,
    prop: Option<&Responsive<T>>,
    theme: Option<&Theme>,
) -> Option<String> {
    Resolution {
        theme,
        breakpoints: &DEFAULT_BREAKPOINT_TABLE,
        categories: &DEFAULT_CATEGORIES,
    }
    .resolve(prop_key, prop)
}

/// 主题 token 替换
///
/// 属性属于某个 token 分类、主题中存在该分类表且值是表中的 key 时返回表中的值，
/// 否则原样返回
pub fn to_theme_value_if_needed<T: Display>(
    prop_key: &str,
    value: &T,
    theme: Option<&Theme>,
) -> String {
    theme_value(prop_key, value, theme, &DEFAULT_CATEGORIES)
}

fn theme_value<T: Display>(
    prop_key: &str,
    value: &T,
    theme: Option<&Theme>,
    categories: &PropertyCategories,
) -> String {
    let key = value.to_string();

    let (Some(theme), Some(category)) = (theme, categories.category_for(prop_key)) else {
        return key;
    };

    match theme.lookup(category, &key) {
        Some(token) => {
            tracing::trace!(property = prop_key, %key, %category, token, "theme token resolved");
            token.to_string()
        }
        None => {
            tracing::trace!(property = prop_key, %key, %category, "no theme token, passing literal through");
            key
        }
    }
}

/// 一次解析所需的只读上下文
struct Resolution<'a> {
    theme: Option<&'a Theme>,
    breakpoints: &'a BreakpointTable,
    categories: &'a PropertyCategories,
}

impl Resolution<'_> {
    fn rules<T: Display>(&self, prop_key: &str, prop: &Responsive<T>) -> Vec<ResolvedRule> {
        prop.entries()
            .into_iter()
            .map(|(breakpoint, value)| ResolvedRule {
                breakpoint,
                declaration: Declaration::new(
                    prop_key,
                    theme_value(prop_key, value, self.theme, self.categories),
                ),
            })
            .collect()
    }

    fn resolve<T: Display>(&self, prop_key: &str, prop: Option<&Responsive<T>>) -> Option<String> {
        let prop = prop?;
        if prop.is_absent() {
            return None;
        }

        let fragments: Vec<String> = self
            .rules(prop_key, prop)
            .iter()
            .map(|rule| render_rule(rule, self.breakpoints))
            .collect();

        Some(fragments.join("\n"))
    }
}

/// 渲染单条规则：base 直接输出声明，其余包裹在 media query 中
pub fn render_rule(rule: &ResolvedRule, breakpoints: &BreakpointTable) -> String {
    match (rule.breakpoint, breakpoints.media_query(rule.breakpoint)) {
        (Breakpoint::Base, _) | (_, None) => rule.declaration.to_string(),
        (_, Some(media)) => format!("{} {{{}}}", media, rule.declaration),
    }
}

/// 绑定了主题、断点表和属性分类的解析器
///
/// 配置在构建后只读，可在多个线程间共享
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    theme: Option<Theme>,
    breakpoints: BreakpointTable,
    categories: PropertyCategories,
}

impl StyleResolver {
    pub fn new(theme: Option<Theme>) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn from_config(config: ResolverConfig) -> Self {
        Self {
            theme: config.theme,
            breakpoints: config.breakpoints,
            categories: config.properties.into_iter().collect(),
        }
    }

    /// 从 JSON 配置构建
    ///
    /// ```json
    /// {
    ///   "theme": { "colors": { "primary": "#3f51b5" } },
    ///   "breakpoints": { "xl": "1440px" },
    ///   "properties": { "gap": "space" }
    /// }
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_config(ResolverConfig::from_json(json_str)?))
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_categories(mut self, categories: PropertyCategories) -> Self {
        self.categories = categories;
        self
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    pub fn categories(&self) -> &PropertyCategories {
        &self.categories
    }

    pub fn theme_value<T: Display>(&self, prop_key: &str, value: &T) -> String {
        theme_value(prop_key, value, self.theme.as_ref(), &self.categories)
    }

    /// 结构化结果：每个已设置的断点一条声明，按断点升序
    pub fn resolve_rules<T: Display>(&self, prop_key: &str, prop: &Responsive<T>) -> Vec<ResolvedRule> {
        self.resolution().rules(prop_key, prop)
    }

    pub fn resolve<T: Display>(&self, prop_key: &str, prop: Option<&Responsive<T>>) -> Option<String> {
        self.resolution().resolve(prop_key, prop)
    }

    fn resolution(&self) -> Resolution<'_> {
        Resolution {
            theme: self.theme.as_ref(),
            breakpoints: &self.breakpoints,
            categories: &self.categories,
        }
    }
}
