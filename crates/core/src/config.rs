use crate::breakpoint::BreakpointTable;
use crate::error::ConfigError;
use crate::theme::{Theme, TokenCategory};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 解析器配置
///
/// 所有字段都有默认值；`properties` 中的关联会覆盖或扩展默认的属性分类
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    pub theme: Option<Theme>,
    pub breakpoints: BreakpointTable,
    pub properties: IndexMap<String, TokenCategory>,
}

impl ResolverConfig {
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ResolverConfig::from_json("{}").unwrap();
        assert!(config.theme.is_none());
        assert_eq!(config.breakpoints, BreakpointTable::default());
        assert!(config.properties.is_empty());
    }

    #[test]
    fn test_full_config() {
        let json = r##"{
            "theme": { "colors": { "primary": "#3f51b5" } },
            "breakpoints": { "sm": "600px" },
            "properties": { "gap": "space", "border-color": "colors" }
        }"##;

        let config = ResolverConfig::from_json(json).unwrap();
        let theme = config.theme.as_ref().unwrap();
        assert_eq!(theme.lookup(TokenCategory::Colors, "primary"), Some("#3f51b5"));
        assert_eq!(config.breakpoints.threshold(Breakpoint::Sm), Some("600px"));
        assert_eq!(config.properties.get("gap"), Some(&TokenCategory::Space));
        assert_eq!(config.properties.get("border-color"), Some(&TokenCategory::Colors));
    }

    #[test]
    fn test_unknown_category_is_error() {
        let result = ResolverConfig::from_json(r#"{ "properties": { "gap": "spacing" } }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_invalid_breakpoint_is_error() {
        let result = ResolverConfig::from_json(r#"{ "breakpoints": { "md": "" } }"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("empty threshold"));
    }
}
