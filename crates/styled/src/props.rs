use crate::builder::StyleBuilder;
use crate::values::{
    AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, GridAutoFlow, GridLine,
    JustifyContent, JustifyItems, JustifySelf,
};
use breeze_core::Responsive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 主题 token 或字面值
///
/// 前端可以传 token 名（`"primary"`）、数组下标（`2`）或 CSS 字面值（`"10px"`）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawThemeValue", into = "String")]
pub struct ThemeValue(String);

impl ThemeValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue(value)
    }
}

impl From<u32> for ThemeValue {
    fn from(index: u32) -> Self {
        ThemeValue(index.to_string())
    }
}

impl From<ThemeValue> for String {
    fn from(value: ThemeValue) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawThemeValue {
    Text(String),
    Index(u64),
    Number(f64),
}

impl From<RawThemeValue> for ThemeValue {
    fn from(raw: RawThemeValue) -> Self {
        match raw {
            RawThemeValue::Text(text) => ThemeValue(text),
            RawThemeValue::Index(index) => ThemeValue(index.to_string()),
            RawThemeValue::Number(number) => ThemeValue(number.to_string()),
        }
    }
}

/// 一组样式 props，能把自己写入 [`StyleBuilder`]
pub trait StyleProps {
    fn apply(&self, builder: &mut StyleBuilder<'_>);
}

macro_rules! style_props {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($field:ident: $ty:ty => $property:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<Responsive<$ty>>,
            )+
        }

        impl StyleProps for $name {
            fn apply(&self, builder: &mut StyleBuilder<'_>) {
                $(builder.prop($property, self.$field.as_ref());)+
            }
        }
    };
}

style_props! {
    /// 外边距与内边距（解析 `space` token）
    SpaceProps {
        margin: ThemeValue => "margin",
        margin_top: ThemeValue => "margin-top",
        margin_right: ThemeValue => "margin-right",
        margin_bottom: ThemeValue => "margin-bottom",
        margin_left: ThemeValue => "margin-left",
        padding: ThemeValue => "padding",
        padding_top: ThemeValue => "padding-top",
        padding_right: ThemeValue => "padding-right",
        padding_bottom: ThemeValue => "padding-bottom",
        padding_left: ThemeValue => "padding-left",
    }
}

style_props! {
    /// 文字颜色与背景色（解析 `colors` token）
    ColorProps {
        color: ThemeValue => "color",
        background_color: ThemeValue => "background-color",
    }
}

style_props! {
    TypographyProps {
        font_size: ThemeValue => "font-size",
        letter_spacing: ThemeValue => "letter-spacing",
        line_height: ThemeValue => "line-height",
        font_weight: String => "font-weight",
        text_align: String => "text-align",
    }
}

style_props! {
    /// 尺寸、定位与边框，原样输出
    LayoutProps {
        display: String => "display",
        width: String => "width",
        height: String => "height",
        min_width: String => "min-width",
        min_height: String => "min-height",
        max_width: String => "max-width",
        max_height: String => "max-height",
        overflow: String => "overflow",
        position: String => "position",
        top: String => "top",
        right: String => "right",
        bottom: String => "bottom",
        left: String => "left",
        border: String => "border",
        border_radius: String => "border-radius",
    }
}

style_props! {
    /// Flex container and flex item props.
    FlexProps {
        flex_direction: FlexDirection => "flex-direction",
        flex_wrap: FlexWrap => "flex-wrap",
        align_items: AlignItems => "align-items",
        align_content: AlignContent => "align-content",
        justify_items: JustifyItems => "justify-items",
        justify_content: JustifyContent => "justify-content",
        flex_grow: String => "flex-grow",
        flex_shrink: String => "flex-shrink",
        flex_basis: String => "flex-basis",
        order: String => "order",
        align_self: AlignSelf => "align-self",
        justify_self: JustifySelf => "justify-self",
    }
}

style_props! {
    GridProps {
        grid_gap: String => "grid-gap",
        grid_column_gap: String => "grid-column-gap",
        grid_row_gap: String => "grid-row-gap",
        grid_column: GridLine => "grid-column",
        grid_row: GridLine => "grid-row",
        grid_auto_flow: GridAutoFlow => "grid-auto-flow",
        grid_auto_columns: String => "grid-auto-columns",
        grid_auto_rows: String => "grid-auto-rows",
        grid_template_columns: String => "grid-template-columns",
        grid_template_rows: String => "grid-template-rows",
        grid_template_areas: String => "grid-template-areas",
        grid_area: GridLine => "grid-area",
    }
}
