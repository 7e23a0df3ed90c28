use serde::{Deserialize, Serialize};

/// When to colour terminal output
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// User configuration.
///
/// Example YAML:
/// ```yaml
/// color: auto
/// default_csv: ~/school/marks.csv
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub color: ColorMode,

    /// File imported when the CSV filename prompt is left blank
    #[serde(default)]
    pub default_csv: Option<String>,
}
