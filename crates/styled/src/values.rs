//! Typed CSS keyword values for flex and grid props.
//!
//! Every enum accepts the CSS-wide keywords through `Global`. Open-ended
//! properties also take an arbitrary value through `Custom`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {kind} value")]
pub struct UnknownKeyword {
    pub kind: &'static str,
    pub value: String,
}

/// CSS 全局关键字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssGlobal {
    MozInitial,
    Inherit,
    Initial,
    Revert,
    Unset,
}

impl CssGlobal {
    pub fn as_str(&self) -> &'static str {
        match self {
            CssGlobal::MozInitial => "-moz-initial",
            CssGlobal::Inherit => "inherit",
            CssGlobal::Initial => "initial",
            CssGlobal::Revert => "revert",
            CssGlobal::Unset => "unset",
        }
    }
}

impl FromStr for CssGlobal {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-moz-initial" => Ok(CssGlobal::MozInitial),
            "inherit" => Ok(CssGlobal::Inherit),
            "initial" => Ok(CssGlobal::Initial),
            "revert" => Ok(CssGlobal::Revert),
            "unset" => Ok(CssGlobal::Unset),
            other => Err(UnknownKeyword {
                kind: "CssGlobal",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CssGlobal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! css_keywords {
    // 封闭集合：未知值解析失败
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $css:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Global(CssGlobal),
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)+
                    $name::Global(global) => global.as_str(),
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($css => Ok($name::$variant),)+
                    other => other
                        .parse::<CssGlobal>()
                        .map($name::Global)
                        .map_err(|_| UnknownKeyword {
                            kind: stringify!($name),
                            value: other.to_string(),
                        }),
                }
            }
        }

        css_keywords!(@serde $name);
    };

    // 开放集合：未知值保留为 Custom
    (
        $(#[$meta:meta])*
        $name:ident open { $($variant:ident => $css:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Global(CssGlobal),
            Custom(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $css,)+
                    $name::Global(global) => global.as_str(),
                    $name::Custom(value) => value.as_str(),
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s {
                    $($css => $name::$variant,)+
                    other => other
                        .parse::<CssGlobal>()
                        .map($name::Global)
                        .unwrap_or_else(|_| $name::Custom(other.to_string())),
                })
            }
        }

        css_keywords!(@serde $name);
    };

    (@serde $name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

css_keywords! {
    /// `flex-direction`
    FlexDirection {
        Column => "column",
        ColumnReverse => "column-reverse",
        Row => "row",
        RowReverse => "row-reverse",
    }
}

css_keywords! {
    /// `flex-wrap`
    FlexWrap {
        Nowrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

css_keywords! {
    /// `align-items`
    AlignItems open {
        Center => "center",
        End => "end",
        FlexEnd => "flex-end",
        FlexStart => "flex-start",
        SelfEnd => "self-end",
        SelfStart => "self-start",
        Start => "start",
        Baseline => "baseline",
        Normal => "normal",
        Stretch => "stretch",
    }
}

css_keywords! {
    /// `align-content`
    AlignContent open {
        SpaceAround => "space-around",
        SpaceBetween => "space-between",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
        Center => "center",
        End => "end",
        FlexEnd => "flex-end",
        FlexStart => "flex-start",
        Start => "start",
        Baseline => "baseline",
        Normal => "normal",
    }
}

css_keywords! {
    /// `align-self`
    AlignSelf open {
        Center => "center",
        End => "end",
        FlexEnd => "flex-end",
        FlexStart => "flex-start",
        SelfEnd => "self-end",
        SelfStart => "self-start",
        Start => "start",
        Auto => "auto",
        Baseline => "baseline",
        Normal => "normal",
        Stretch => "stretch",
    }
}

css_keywords! {
    /// `justify-items`
    JustifyItems open {
        Center => "center",
        End => "end",
        FlexEnd => "flex-end",
        FlexStart => "flex-start",
        SelfEnd => "self-end",
        SelfStart => "self-start",
        Start => "start",
        Baseline => "baseline",
        Left => "left",
        Legacy => "legacy",
        Normal => "normal",
        Right => "right",
        Stretch => "stretch",
    }
}

css_keywords! {
    /// `justify-content`
    JustifyContent open {
        SpaceAround => "space-around",
        SpaceBetween => "space-between",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
        Center => "center",
        End => "end",
        FlexEnd => "flex-end",
        FlexStart => "flex-start",
        Start => "start",
        Left => "left",
        Normal => "normal",
        Right => "right",
    }
}

css_keywords! {
    /// `justify-self`
    JustifySelf open {
        Center => "center",
        End => "end",
        FlexEnd => "flex-end",
        FlexStart => "flex-start",
        SelfEnd => "self-end",
        SelfStart => "self-start",
        Start => "start",
        Auto => "auto",
        Baseline => "baseline",
        Left => "left",
        Normal => "normal",
        Right => "right",
        Stretch => "stretch",
    }
}

css_keywords! {
    /// `grid-auto-flow`
    GridAutoFlow open {
        Column => "column",
        Dense => "dense",
        Row => "row",
    }
}

css_keywords! {
    /// `grid-column`, `grid-row`, `grid-area`
    GridLine open {
        Auto => "auto",
    }
}
