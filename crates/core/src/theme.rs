use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 主题 token 分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    Space,
    Colors,
    FontSizes,
    LetterSpacings,
    LineHeights,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Space,
        TokenCategory::Colors,
        TokenCategory::FontSizes,
        TokenCategory::LetterSpacings,
        TokenCategory::LineHeights,
    ];

    /// 主题 JSON 中对应的字段名
    pub fn key(self) -> &'static str {
        match self {
            TokenCategory::Space => "space",
            TokenCategory::Colors => "colors",
            TokenCategory::FontSizes => "fontSizes",
            TokenCategory::LetterSpacings => "letterSpacings",
            TokenCategory::LineHeights => "lineHeights",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// token 表：token 名 → CSS 字面值
///
/// JSON 中可以写成对象，也可以写成数组（此时 key 为下标 `"0"`, `"1"`, …）：
/// ```json
/// { "space": ["0px", "4px", "8px"], "colors": { "primary": "#3f51b5" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenTable {
    tokens: IndexMap<String, String>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从数组构建，key 为下标
    pub fn from_list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            tokens: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tokens.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TokenTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTokenValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawTokenValue> for String {
    fn from(value: RawTokenValue) -> Self {
        match value {
            RawTokenValue::Text(text) => text,
            RawTokenValue::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTokenTable {
    List(Vec<RawTokenValue>),
    Map(IndexMap<String, RawTokenValue>),
}

impl<'de> Deserialize<'de> for TokenTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawTokenTable::deserialize(deserializer)? {
            RawTokenTable::List(values) => TokenTable::from_list(values.into_iter().map(String::from)),
            RawTokenTable::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| (k, String::from(v)))
                .collect(),
        })
    }
}

/// 应用主题：启动时构建一次，之后只读
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacings: Option<TokenTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_heights: Option<TokenTable>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串加载主题
    pub fn from_json(json_str: &str) -> Result<Theme, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn with_table(mut self, category: TokenCategory, table: TokenTable) -> Self {
        *self.slot_mut(category) = Some(table);
        self
    }

    pub fn table(&self, category: TokenCategory) -> Option<&TokenTable> {
        match category {
            TokenCategory::Space => self.space.as_ref(),
            TokenCategory::Colors => self.colors.as_ref(),
            TokenCategory::FontSizes => self.font_sizes.as_ref(),
            TokenCategory::LetterSpacings => self.letter_spacings.as_ref(),
            TokenCategory::LineHeights => self.line_heights.as_ref(),
        }
    }

    /// 在指定分类中查找 token
    pub fn lookup(&self, category: TokenCategory, key: &str) -> Option<&str> {
        self.table(category)?.get(key)
    }

    fn slot_mut(&mut self, category: TokenCategory) -> &mut Option<TokenTable> {
        match category {
            TokenCategory::Space => &mut self.space,
            TokenCategory::Colors => &mut self.colors,
            TokenCategory::FontSizes => &mut self.font_sizes,
            TokenCategory::LetterSpacings => &mut self.letter_spacings,
            TokenCategory::LineHeights => &mut self.line_heights,
        }
    }
}
