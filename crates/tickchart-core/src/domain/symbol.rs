use std::fmt::{Display, Formatter};

use crate::ChartError;

const MAX_SYMBOL_LEN: usize = 15;

/// Ticker symbol as sent to the quote API.
///
/// Exchange listings use `.`, `-` and `$` for share classes and preferreds,
/// so those are accepted alongside ASCII alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol to uppercase.
    pub fn parse(input: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidSymbol {
            value: input.to_owned(),
        };

        let normalized = input.trim().to_ascii_uppercase();
        if normalized.is_empty() || normalized.chars().count() > MAX_SYMBOL_LEN {
            return Err(invalid());
        }

        if !normalized.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let valid = normalized
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '$'));
        if !valid {
            return Err(invalid());
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ChartError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
