//! Dynamic (JSON) input from the JavaScript side.
//!
//! Props arriving from JS are untyped: a value is treated as a responsive map
//! when it is an object with at least one of `base`, `sm`, `md`, `lg`, `xl`.
//! Other keys are ignored.

use crate::breakpoint::Breakpoint;
use crate::resolve::{to_prop_value, to_theme_value_if_needed, StyleResolver};
use crate::responsive::{Responsive, ResponsiveMap};
use crate::theme::Theme;
use serde_json::{Number, Value};

/// JSON 标量转为 CSS 文本；对象、数组和 null 返回 `None`
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// 整数值的浮点数按整数输出（`1.0` → `"1"`），与数组 token 表的下标 key 一致
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float < i64::MAX as f64 =>
        {
            (float as i64).to_string()
        }
        _ => number.to_string(),
    }
}

/// 把 JSON 值转换为响应式值
///
/// - `null` → `None`
/// - 字符串/数字/布尔 → `Scalar`
/// - 含任一断点 key 的对象 → `PerBreakpoint`，其他 key 被忽略
/// - 不含断点 key 的对象、数组 → `None`
///
/// 数组和不含断点 key 的对象不会被当作标量输出，这里刻意比动态类型的判断更严格
pub fn responsive_from_json(value: &Value) -> Option<Responsive<String>> {
    match value {
        Value::Null => None,
        Value::Object(entries) => {
            let mut map = ResponsiveMap::new();
            for (key, entry) in entries {
                let Some(breakpoint) = Breakpoint::from_name(key) else {
                    tracing::debug!(key = key.as_str(), "ignoring unknown breakpoint key");
                    continue;
                };
                match scalar_text(entry) {
                    Some(text) => map.set(breakpoint, text),
                    None => {
                        tracing::debug!(%breakpoint, "ignoring non-scalar breakpoint value")
                    }
                }
            }
            if map.is_empty() {
                None
            } else {
                Some(Responsive::PerBreakpoint(map))
            }
        }
        Value::Array(_) => {
            tracing::debug!("arrays are not valid style values");
            None
        }
        scalar => scalar_text(scalar).map(Responsive::Scalar),
    }
}

/// `to_prop_value` for untyped JSON input.
pub fn to_prop_value_json(prop_key: &str, prop: &Value, theme: Option<&Theme>) -> Option<String> {
    let responsive = responsive_from_json(prop);
    to_prop_value(prop_key, responsive.as_ref(), theme)
}

/// 单个 JSON 标量的 token 替换；非标量返回 `None`
pub fn to_theme_value_json(prop_key: &str, value: &Value, theme: Option<&Theme>) -> Option<String> {
    scalar_text(value).map(|text| to_theme_value_if_needed(prop_key, &text, theme))
}

impl StyleResolver {
    pub fn resolve_json(&self, prop_key: &str, prop: &Value) -> Option<String> {
        let responsive = responsive_from_json(prop);
        self.resolve(prop_key, responsive.as_ref())
    }

    pub fn theme_value_json(&self, prop_key: &str, value: &Value) -> Option<String> {
        scalar_text(value).map(|text| self.theme_value(prop_key, &text))
    }
}
