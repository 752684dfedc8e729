use serde::{Deserialize, Serialize};

/// Tokens recognized as missing values when no explicit list is given.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &["", "NA", "NaN", "null"];

/// Options controlling how a delimited file becomes a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field delimiter (single byte).
    pub delimiter: u8,
    /// Tokens mapped to the missing marker, compared case-insensitively
    /// against the trimmed field.
    pub missing_tokens: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
        }
    }
}

impl LoadOptions {
    pub fn is_missing_token(&self, field: &str) -> bool {
        self.missing_tokens
            .iter()
            .any(|token| token.eq_ignore_ascii_case(field))
    }
}
