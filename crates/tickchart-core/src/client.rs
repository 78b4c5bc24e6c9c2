//! Quote API client.
//!
//! The upstream API answers `200 OK` even for application-level failures
//! (unknown symbol, exhausted quota) and reports them as an `"Error Message"`
//! field in the body. Every response therefore goes through two checks: the
//! HTTP status first, then the body itself.

use std::sync::Arc;

use serde_json::Value;

use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{ApiConfig, ChartError, QueryParameters, QuoteRequest, Symbol};

/// In-band error marker used by the quote API.
pub const ERROR_MESSAGE_KEY: &str = "Error Message";

const SEARCH_MATCHES_KEY: &str = "bestMatches";

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http_client: Arc<dyn HttpClient>,
}

impl ApiClient {
    /// Client using the reqwest transport.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ApiConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Fetches the raw time series body for `request`.
    ///
    /// The returned JSON has passed both the status and the in-band error
    /// checks; locating the series inside it is left to
    /// [`filter_series`](crate::filter_series).
    #[tracing::instrument(
        name = "api.fetch_series",
        skip(self, request),
        fields(symbol = %request.symbol(), function = %request.function())
    )]
    pub async fn fetch_series(&self, request: &QuoteRequest) -> Result<Value, ChartError> {
        let params = QueryParameters::for_series(request, self.config.api_key());
        self.get_json(params).await
    }

    /// Asks `SYMBOL_SEARCH` whether `symbol` is a listed ticker.
    ///
    /// A symbol counts as known when any best match carries it verbatim as
    /// one of its values.
    #[tracing::instrument(name = "api.search_symbol", skip(self), fields(symbol = %symbol))]
    pub async fn search_symbol(&self, symbol: &Symbol) -> Result<bool, ChartError> {
        let params = QueryParameters::for_symbol_search(symbol, self.config.api_key());
        let body = self.get_json(params).await?;

        let matches = body
            .get(SEARCH_MATCHES_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| ChartError::schema_mismatch(SEARCH_MATCHES_KEY))?;

        Ok(matches.iter().filter_map(Value::as_object).any(|entry| {
            entry
                .values()
                .any(|value| value.as_str() == Some(symbol.as_str()))
        }))
    }

    async fn get_json(&self, params: QueryParameters) -> Result<Value, ChartError> {
        tracing::debug!(
            url = %self.config.base_url(),
            params = ?params.redacted(),
            "calling quote api"
        );

        let request = HttpRequest::get(self.config.base_url())
            .with_query(params)
            .with_timeout_ms(self.config.timeout_ms());

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| ChartError::unavailable(error.message()))?;

        decode_response(&response)
    }
}

/// Applies the status check and the in-band error check to a response.
pub fn decode_response(response: &HttpResponse) -> Result<Value, ChartError> {
    if !response.is_success() {
        return Err(ChartError::ApiStatus {
            status_code: response.status,
        });
    }

    let body: Value = serde_json::from_str(&response.body)
        .map_err(|e| ChartError::malformed(format!("response body is not JSON: {e}")))?;

    if response.body.contains(ERROR_MESSAGE_KEY) {
        if let Some(message) = body.get(ERROR_MESSAGE_KEY) {
            let message = match message {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            return Err(ChartError::ApiLogical { message });
        }
    }

    Ok(body)
}
