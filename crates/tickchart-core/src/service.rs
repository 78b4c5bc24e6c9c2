//! The request-scoped fetch → filter → chart pipeline.

use crate::{
    chart_title, filter_series, render_chart, ApiClient, ChartData, ChartError, ChartKind,
    ErrorKind, QuoteRequest, RenderedChart, Symbol, TimeSeriesFunction,
};

/// Everything a user picks on the form, dates still unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartQuery {
    pub symbol: Symbol,
    pub function: TimeSeriesFunction,
    pub chart_kind: ChartKind,
    pub start_date: String,
    pub end_date: String,
}

/// Runs one chart request end to end.
#[derive(Clone)]
pub struct ChartService {
    client: ApiClient,
    verify_symbols: bool,
}

impl ChartService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            verify_symbols: false,
        }
    }

    /// Check every symbol against `SYMBOL_SEARCH` before fetching its series.
    pub fn with_symbol_verification(mut self, enabled: bool) -> Self {
        self.verify_symbols = enabled;
        self
    }

    /// Validates the query, fetches and filters the series, and renders it.
    ///
    /// Date and window errors are returned before any network call.
    #[tracing::instrument(
        name = "chart.render",
        skip(self, query),
        fields(symbol = %query.symbol, function = %query.function)
    )]
    pub async fn render(&self, query: &ChartQuery) -> Result<RenderedChart, ChartError> {
        let result = self.run(query).await;
        if let Err(error) = &result {
            log_failure(error);
        }
        result
    }

    async fn run(&self, query: &ChartQuery) -> Result<RenderedChart, ChartError> {
        let request = QuoteRequest::parse(
            query.symbol.clone(),
            query.function,
            &query.start_date,
            &query.end_date,
        )?;

        if self.verify_symbols && !self.client.search_symbol(request.symbol()).await? {
            return Err(ChartError::UnknownSymbol {
                symbol: request.symbol().to_string(),
            });
        }

        let body = self.client.fetch_series(&request).await?;
        let series = filter_series(&body, &request)?;
        if series.is_empty() {
            return Err(ChartError::EmptyResult);
        }

        let data = ChartData::assemble(&series)?;
        tracing::info!(points = data.labels.len(), "chart data assembled");

        let title = chart_title(request.symbol(), request.start(), request.end());
        Ok(render_chart(&data, query.chart_kind, &title))
    }
}

fn log_failure(error: &ChartError) {
    let detail = error.detail().unwrap_or_default();
    match error.kind() {
        ErrorKind::Contract => {
            tracing::error!(%error, detail, "quote api response no longer matches expected layout")
        }
        ErrorKind::Upstream => tracing::warn!(%error, detail, "quote api call failed"),
        ErrorKind::UserInput => tracing::info!(%error, "chart request rejected"),
    }
}
