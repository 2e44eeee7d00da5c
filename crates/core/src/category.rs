use crate::theme::TokenCategory;
use indexmap::IndexMap;
use phf::phf_map;

/// CSS 属性 → token 分类（默认关联）
///
/// 不在表中的属性不查主题，原样输出
pub static DEFAULT_PROPERTY_CATEGORIES: phf::Map<&'static str, TokenCategory> = phf_map! {
    "margin" => TokenCategory::Space,
    "margin-top" => TokenCategory::Space,
    "margin-left" => TokenCategory::Space,
    "margin-bottom" => TokenCategory::Space,
    "margin-right" => TokenCategory::Space,
    "padding" => TokenCategory::Space,
    "padding-top" => TokenCategory::Space,
    "padding-left" => TokenCategory::Space,
    "padding-bottom" => TokenCategory::Space,
    "padding-right" => TokenCategory::Space,

    "color" => TokenCategory::Colors,
    "background-color" => TokenCategory::Colors,

    "font-size" => TokenCategory::FontSizes,
    "letter-spacing" => TokenCategory::LetterSpacings,
    "line-height" => TokenCategory::LineHeights,
};

/// 属性分类关联
///
/// 默认使用 [`DEFAULT_PROPERTY_CATEGORIES`]，额外的关联优先于默认表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCategories {
    overrides: IndexMap<String, TokenCategory>,
}

impl PropertyCategories {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加或覆盖一个属性的分类
    pub fn insert(&mut self, property: impl Into<String>, category: TokenCategory) {
        self.overrides.insert(property.into(), category);
    }

    pub fn with(mut self, property: impl Into<String>, category: TokenCategory) -> Self {
        self.insert(property, category);
        self
    }

    /// 查询属性对应的分类
    pub fn category_for(&self, property: &str) -> Option<TokenCategory> {
        self.overrides
            .get(property)
            .copied()
            .or_else(|| DEFAULT_PROPERTY_CATEGORIES.get(property).copied())
    }
}

impl FromIterator<(String, TokenCategory)> for PropertyCategories {
    fn from_iter<I: IntoIterator<Item = (String, TokenCategory)>>(iter: I) -> Self {
        Self {
            overrides: iter.into_iter().collect(),
        }
    }
}
