use std::fmt;

#[derive(Debug)]
pub enum MatchError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (duplicate pair, fuzzy on non-text, etc.).
    ConfigValidation(String),
    /// A configured column does not exist in the referenced dataset.
    UnknownColumn { side: &'static str, column: String },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::UnknownColumn { side, column } => {
                write!(f, "{side} dataset has no column '{column}'")
            }
        }
    }
}

impl std::error::Error for MatchError {}
