//! Breakpoint names and their min-width thresholds
//!
//! `base` carries no media query; `sm`..`xl` map to ascending `min-width` values.

use crate::error::ConfigError;
use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 默认断点阈值
pub static DEFAULT_BREAKPOINTS: phf::Map<&'static str, &'static str> = phf_map! {
    "sm" => "640px",
    "md" => "768px",
    "lg" => "1024px",
    "xl" => "1280px",
};

/// 响应式断点
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending threshold order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "base" => Some(Breakpoint::Base),
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            _ => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 断点阈值表
///
/// 默认值来自 [`DEFAULT_BREAKPOINTS`]，可通过配置覆盖单个断点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakpointTable {
    sm: String,
    md: String,
    lg: String,
    xl: String,
}

impl BreakpointTable {
    /// 覆盖某个断点的阈值
    ///
    /// `base` 没有阈值，空字符串也不被接受
    pub fn with_threshold(
        mut self,
        breakpoint: Breakpoint,
        threshold: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let threshold = threshold.into();
        if threshold.trim().is_empty() {
            return Err(ConfigError::EmptyThreshold(breakpoint.name().to_string()));
        }
        match breakpoint {
            Breakpoint::Base => return Err(ConfigError::BaseThreshold),
            Breakpoint::Sm => self.sm = threshold,
            Breakpoint::Md => self.md = threshold,
            Breakpoint::Lg => self.lg = threshold,
            Breakpoint::Xl => self.xl = threshold,
        }
        Ok(self)
    }

    /// 查询断点阈值，`base` 返回 `None`
    pub fn threshold(&self, breakpoint: Breakpoint) -> Option<&str> {
        match breakpoint {
            Breakpoint::Base => None,
            Breakpoint::Sm => Some(&self.sm),
            Breakpoint::Md => Some(&self.md),
            Breakpoint::Lg => Some(&self.lg),
            Breakpoint::Xl => Some(&self.xl),
        }
    }

    /// Media query prelude for a breakpoint.
    ///
    /// - `Sm` → `"@media screen and (min-width: 640px)"`
    /// - `Base` → `None`
    pub fn media_query(&self, breakpoint: Breakpoint) -> Option<String> {
        self.threshold(breakpoint)
            .map(|threshold| format!("@media screen and (min-width: {})", threshold))
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        let get = |name: &str| DEFAULT_BREAKPOINTS.get(name).copied().unwrap_or_default();
        Self {
            sm: get("sm").to_string(),
            md: get("md").to_string(),
            lg: get("lg").to_string(),
            xl: get("xl").to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for BreakpointTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides: indexmap::IndexMap<String, String> = Deserialize::deserialize(deserializer)?;
        let mut table = BreakpointTable::default();
        for (name, threshold) in overrides {
            let breakpoint = Breakpoint::from_name(&name)
                .ok_or_else(|| ConfigError::UnknownBreakpoint(name.clone()))
                .map_err(serde::de::Error::custom)?;
            table = table
                .with_threshold(breakpoint, threshold)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let table = BreakpointTable::default();
        assert_eq!(table.threshold(Breakpoint::Base), None);
        assert_eq!(table.threshold(Breakpoint::Sm), Some("640px"));
        assert_eq!(table.threshold(Breakpoint::Md), Some("768px"));
        assert_eq!(table.threshold(Breakpoint::Lg), Some("1024px"));
        assert_eq!(table.threshold(Breakpoint::Xl), Some("1280px"));
    }

    #[test]
    fn test_media_query() {
        let table = BreakpointTable::default();
        assert_eq!(
            table.media_query(Breakpoint::Lg).as_deref(),
            Some("@media screen and (min-width: 1024px)")
        );
        assert_eq!(table.media_query(Breakpoint::Base), None);
    }

    #[test]
    fn test_order_is_ascending() {
        let mut sorted = Breakpoint::ALL;
        sorted.sort();
        assert_eq!(sorted, Breakpoint::ALL);
    }

    #[test]
    fn test_name_roundtrip() {
        for bp in Breakpoint::ALL {
            assert_eq!(Breakpoint::from_name(bp.name()), Some(bp));
        }
        assert_eq!(Breakpoint::from_name("2xl"), None);
    }

    #[test]
    fn test_override_threshold() {
        let table = BreakpointTable::default()
            .with_threshold(Breakpoint::Md, "800px")
            .unwrap();
        assert_eq!(table.threshold(Breakpoint::Md), Some("800px"));
        assert_eq!(table.threshold(Breakpoint::Sm), Some("640px"));
    }

    #[test]
    fn test_override_rejects_base_and_empty() {
        assert!(BreakpointTable::default()
            .with_threshold(Breakpoint::Base, "0px")
            .is_err());
        assert!(BreakpointTable::default()
            .with_threshold(Breakpoint::Sm, "  ")
            .is_err());
    }

    #[test]
    fn test_deserialize_partial_overrides() {
        let table: BreakpointTable = serde_json::from_str(r#"{ "xl": "1440px" }"#).unwrap();
        assert_eq!(table.threshold(Breakpoint::Xl), Some("1440px"));
        assert_eq!(table.threshold(Breakpoint::Lg), Some("1024px"));
    }

    #[test]
    fn test_deserialize_unknown_breakpoint() {
        let result: Result<BreakpointTable, _> = serde_json::from_str(r#"{ "2xl": "1536px" }"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("2xl"));
    }
}
