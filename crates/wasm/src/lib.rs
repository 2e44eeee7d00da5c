use wasm_bindgen::prelude::*;
use serde_json::Value;

use breeze_core::{
    to_prop_value_json, to_theme_value_json, ConfigError, ResolverConfig, StyleResolver, Theme,
};

// ── JS 值转换 ─────────────────────────────────────────────────

/// JS 值 → JSON；`undefined` 视为 `null`
fn to_json(value: JsValue) -> Result<Value, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid value: {}", e)))
}

fn parse_theme(value: Value) -> Result<Option<Theme>, ConfigError> {
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

fn parse_config(value: Value) -> Result<ResolverConfig, ConfigError> {
    if value.is_null() {
        return Ok(ResolverConfig::default());
    }
    Ok(serde_json::from_value(value)?)
}

fn theme_arg(theme: JsValue) -> Result<Option<Theme>, JsError> {
    parse_theme(to_json(theme)?).map_err(|e| JsError::new(&format!("Invalid theme: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 把一个样式 prop 解析为 CSS 文本
///
/// @param propKey - CSS 属性名（如 "margin-top"）
/// @param prop    - 标量或 `{ base, sm, md, lg, xl }` 响应式对象
/// @param theme   - 主题，可选
/// @returns CSS 文本；值缺失时返回 undefined
#[wasm_bindgen(js_name = "toPropValue")]
pub fn to_prop_value(prop_key: &str, prop: JsValue, theme: JsValue) -> Result<Option<String>, JsError> {
    let theme = theme_arg(theme)?;
    let prop = to_json(prop)?;
    Ok(to_prop_value_json(prop_key, &prop, theme.as_ref()))
}

/// 单个值的主题 token 替换
///
/// @returns 替换后的值；非标量返回 undefined
#[wasm_bindgen(js_name = "toThemeValue")]
pub fn to_theme_value(prop_key: &str, value: JsValue, theme: JsValue) -> Result<Option<String>, JsError> {
    let theme = theme_arg(theme)?;
    let value = to_json(value)?;
    Ok(to_theme_value_json(prop_key, &value, theme.as_ref()))
}

/// 可复用的解析器：配置只解析一次
///
/// ```js
/// const resolver = new Resolver({ theme, breakpoints: { md: "700px" } });
/// resolver.toPropValue("padding", { base: 1, md: 2 });
/// ```
#[wasm_bindgen(js_name = "Resolver")]
pub struct JsResolver {
    inner: StyleResolver,
}

#[wasm_bindgen(js_class = "Resolver")]
impl JsResolver {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsResolver, JsError> {
        let config = parse_config(to_json(config)?)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        Ok(JsResolver {
            inner: StyleResolver::from_config(config),
        })
    }

    #[wasm_bindgen(js_name = "toPropValue")]
    pub fn to_prop_value(&self, prop_key: &str, prop: JsValue) -> Result<Option<String>, JsError> {
        Ok(self.inner.resolve_json(prop_key, &to_json(prop)?))
    }

    #[wasm_bindgen(js_name = "toThemeValue")]
    pub fn to_theme_value(&self, prop_key: &str, value: JsValue) -> Result<Option<String>, JsError> {
        Ok(self.inner.theme_value_json(prop_key, &to_json(value)?))
    }
}
