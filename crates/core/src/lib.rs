pub mod breakpoint;
pub mod category;
pub mod config;
pub mod error;
pub mod json;
pub mod resolve;
pub mod responsive;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use breakpoint::{Breakpoint, BreakpointTable};
pub use category::PropertyCategories;
pub use config::ResolverConfig;
pub use error::ConfigError;
pub use json::{responsive_from_json, to_prop_value_json, to_theme_value_json};
pub use resolve::{render_rule, to_prop_value, to_theme_value_if_needed, StyleResolver};
pub use responsive::{Responsive, ResponsiveMap};
pub use theme::{Theme, TokenCategory, TokenTable};
pub use types::{Declaration, ResolvedRule};
