use thiserror::Error;

/// Errors raised when text input (CLI tokens, config values) cannot be mapped onto the demo's
/// closed vocabularies. Domain operations themselves never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("unknown chart kind `{0}` (expected one of: line, bar, column, area, scatter, pie, geomap)")]
    UnknownChartKind(String),

    #[error("invalid action `{0}` (expected select:<kind>, refresh, clear, speed:<ms>, easing:<name> or animations:on|off)")]
    InvalidAction(String),

    #[error("invalid {field} value `{value}`")]
    InvalidValue { field: &'static str, value: String },
}
