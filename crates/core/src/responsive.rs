use crate::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};

/// 响应式样式值：单个值，或按断点分别指定的值
///
/// JSON 形式与前端保持一致：`"10px"` 或 `{ "base": "10px", "md": "20px" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    PerBreakpoint(ResponsiveMap<T>),
    Scalar(T),
}

impl<T> Responsive<T> {
    pub fn scalar(value: T) -> Self {
        Responsive::Scalar(value)
    }

    /// 空映射视为“没有值”
    pub fn is_absent(&self) -> bool {
        match self {
            Responsive::Scalar(_) => false,
            Responsive::PerBreakpoint(map) => map.is_empty(),
        }
    }

    /// 按断点升序返回所有已设置的值，标量值视为 `base`
    pub fn entries(&self) -> Vec<(Breakpoint, &T)> {
        match self {
            Responsive::Scalar(value) => vec![(Breakpoint::Base, value)],
            Responsive::PerBreakpoint(map) => map.iter().collect(),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        match self {
            Responsive::Scalar(value) => Responsive::Scalar(f(value)),
            Responsive::PerBreakpoint(map) => Responsive::PerBreakpoint(ResponsiveMap {
                base: map.base.map(&mut f),
                sm: map.sm.map(&mut f),
                md: map.md.map(&mut f),
                lg: map.lg.map(&mut f),
                xl: map.xl.map(&mut f),
            }),
        }
    }
}

impl<T> From<ResponsiveMap<T>> for Responsive<T> {
    fn from(map: ResponsiveMap<T>) -> Self {
        Responsive::PerBreakpoint(map)
    }
}

impl From<&str> for Responsive<String> {
    fn from(value: &str) -> Self {
        Responsive::Scalar(value.to_string())
    }
}

impl From<String> for Responsive<String> {
    fn from(value: String) -> Self {
        Responsive::Scalar(value)
    }
}

/// 按断点分别指定的值
///
/// 缺失的断点反序列化为 `None`，元素类型不需要实现 `Default`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
}

impl<T> ResponsiveMap<T> {
    pub fn new() -> Self {
        Self {
            base: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// 设置某个断点的值（链式）
    pub fn with(mut self, breakpoint: Breakpoint, value: impl Into<T>) -> Self {
        self.set(breakpoint, value.into());
        self
    }

    pub fn set(&mut self, breakpoint: Breakpoint, value: T) {
        *self.slot_mut(breakpoint) = Some(value);
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Base => self.base.as_ref(),
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Breakpoint::ALL.iter().all(|bp| self.get(*bp).is_none())
    }

    /// 按断点升序迭代（与插入顺序无关）
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(move |bp| self.get(bp).map(|value| (bp, value)))
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<T> {
        match breakpoint {
            Breakpoint::Base => &mut self.base,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }
}

impl<T> Default for ResponsiveMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
