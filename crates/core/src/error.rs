use thiserror::Error;

/// 配置加载错误
///
/// 解析本身从不失败；只有主题和断点配置的读取会产生错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown breakpoint `{0}` (expected one of sm, md, lg, xl)")]
    UnknownBreakpoint(String),

    #[error("breakpoint `{0}` has an empty threshold")]
    EmptyThreshold(String),

    #[error("breakpoint `base` has no threshold")]
    BaseThreshold,
}
