pub mod builder;
pub mod context;
pub mod naming;
pub mod props;
pub mod sheet;
pub mod values;

// Re-export main types
pub use builder::StyleBuilder;
pub use context::RuleContext;
pub use naming::{create_naming_strategy, NamingMode, NamingStrategy};
pub use props::{
    ColorProps, FlexProps, GridProps, LayoutProps, SpaceProps, StyleProps, ThemeValue,
    TypographyProps,
};
pub use sheet::StyleSheet;
pub use values::{
    AlignContent, AlignItems, AlignSelf, CssGlobal, FlexDirection, FlexWrap, GridAutoFlow,
    GridLine, JustifyContent, JustifyItems, JustifySelf, UnknownKeyword,
};
