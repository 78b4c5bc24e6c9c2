//! Query parameters for the quote API.

use std::collections::BTreeMap;

use crate::{QuoteRequest, Symbol, INTRADAY_INTERVAL};

/// Ordered `key=value` pairs sent with a GET to the quote API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters(BTreeMap<String, String>);

impl QueryParameters {
    /// Parameters for a time series call; `interval` is added for intraday only.
    pub fn for_series(request: &QuoteRequest, api_key: &str) -> Self {
        let function = request.function();
        let mut params = Self::default()
            .with("apikey", api_key)
            .with("function", function.api_function())
            .with("symbol", request.symbol().as_str());

        if function.is_intraday() {
            params = params.with("interval", INTRADAY_INTERVAL);
        }

        params
    }

    /// Parameters for a `SYMBOL_SEARCH` lookup.
    pub fn for_symbol_search(symbol: &Symbol, api_key: &str) -> Self {
        Self::default()
            .with("apikey", api_key)
            .with("function", "SYMBOL_SEARCH")
            .with("keywords", symbol.as_str())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Same pairs with the API key masked, for logging.
    pub fn redacted(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, value)| {
                let value = if key == "apikey" { "***" } else { value };
                (key.to_owned(), value.to_owned())
            })
            .collect()
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0.into_iter().collect()
    }
}
