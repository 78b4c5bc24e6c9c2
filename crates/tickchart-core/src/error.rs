use thiserror::Error;

use crate::QuoteDate;

const API_UNAVAILABLE: &str = "The API is currently unavailable.  Please try again later.  \
If the problem persists, please contact your system administrator.";

/// Coarse classification used to decide how a failure is logged and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or unsatisfiable user input; shown to the user as-is.
    UserInput,
    /// The remote API failed or answered with an error of its own.
    Upstream,
    /// The remote API answered successfully but in an unexpected shape.
    Contract,
}

/// Every failure the fetch-filter-render pipeline can produce.
///
/// `Display` renders the message intended for the end user; diagnostic
/// details live in the variant fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("{value} is an invalid date.")]
    InvalidDate { value: String },

    #[error("The end date must be greater than or equal to the start date.")]
    InvalidRange { start: QuoteDate, end: QuoteDate },

    #[error("'{value}' is not a well-formed stock symbol.")]
    InvalidSymbol { value: String },

    #[error("{symbol} is not a valid stock symbol.")]
    UnknownSymbol { symbol: String },

    #[error("{}", API_UNAVAILABLE)]
    ApiUnavailable { detail: String },

    #[error("The API responded with status code \"{status_code}.\"")]
    ApiStatus { status_code: u16 },

    #[error("{message}")]
    ApiLogical { message: String },

    #[error("JSON decoding error")]
    MalformedResponse { detail: String },

    #[error(
        "The API keys used for filtering have changed.  \
Please notify your system administrator to correct this issue."
    )]
    SchemaMismatch { key: String },

    #[error("There was no data for the time period specified.")]
    EmptyResult,
}

impl ChartError {
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::ApiUnavailable {
            detail: detail.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            detail: detail.into(),
        }
    }

    pub fn schema_mismatch(key: impl Into<String>) -> Self {
        Self::SchemaMismatch { key: key.into() }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate { .. }
            | Self::InvalidRange { .. }
            | Self::InvalidSymbol { .. }
            | Self::UnknownSymbol { .. }
            | Self::EmptyResult => ErrorKind::UserInput,
            Self::ApiUnavailable { .. }
            | Self::ApiStatus { .. }
            | Self::ApiLogical { .. }
            | Self::MalformedResponse { .. } => ErrorKind::Upstream,
            Self::SchemaMismatch { .. } => ErrorKind::Contract,
        }
    }

    /// Operator-facing detail that the user message deliberately hides.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ApiUnavailable { detail } | Self::MalformedResponse { detail } => Some(detail),
            Self::SchemaMismatch { key } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_message_hides_transport_detail() {
        let error = ChartError::unavailable("connection refused (os error 111)");
        let message = error.to_string();

        assert!(message.starts_with("The API is currently unavailable."));
        assert!(!message.contains("os error"));
        assert_eq!(error.detail(), Some("connection refused (os error 111)"));
    }

    #[test]
    fn status_message_quotes_code() {
        let error = ChartError::ApiStatus { status_code: 503 };
        assert_eq!(
            error.to_string(),
            "The API responded with status code \"503.\""
        );
    }

    #[test]
    fn logical_error_is_verbatim() {
        let error = ChartError::ApiLogical {
            message: String::from("rate limit exceeded"),
        };
        assert_eq!(error.to_string(), "rate limit exceeded");
        assert_eq!(error.kind(), ErrorKind::Upstream);
    }

    #[test]
    fn schema_mismatch_is_a_contract_error() {
        let error = ChartError::schema_mismatch("Time Series (Daily)");
        assert_eq!(error.kind(), ErrorKind::Contract);
        assert_eq!(ChartError::EmptyResult.kind(), ErrorKind::UserInput);
    }
}
