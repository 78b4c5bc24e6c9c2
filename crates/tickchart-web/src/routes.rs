use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tickchart_core::{ChartError, ChartService};

use crate::form::StockForm;
use crate::page::StockPage;
use crate::symbols::SymbolCatalog;

/// Shared, read-only state for every request.
#[derive(Clone)]
pub struct AppState {
    service: ChartService,
    catalog: Arc<SymbolCatalog>,
}

impl AppState {
    pub fn new(service: ChartService, catalog: SymbolCatalog) -> Self {
        Self {
            service,
            catalog: Arc::new(catalog),
        }
    }
}

/// `/` and `/stocks` both serve the form on GET and chart it on POST.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/stocks", get(show_form).post(submit_form))
        .with_state(state)
}

/// Banner shown in place of a chart when the pipeline fails.
pub fn error_banner(error: &ChartError) -> String {
    format!("ERROR: {error}")
}

async fn show_form(State(state): State<AppState>) -> Html<String> {
    let form = StockForm::default();
    Html(StockPage::blank(&state.catalog, &form).to_string())
}

async fn submit_form(
    State(state): State<AppState>,
    submitted: Result<Form<StockForm>, FormRejection>,
) -> Html<String> {
    // An unreadable body is treated as an empty submission.
    let form = match submitted {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "form body rejected");
            StockForm::default()
        }
    };

    let query = match form.validate(&state.catalog) {
        Ok(query) => query,
        Err(errors) => {
            tracing::debug!(fields = ?errors, "form rejected");
            let page = StockPage {
                field_errors: Some(&errors),
                ..StockPage::blank(&state.catalog, &form)
            };
            return Html(page.to_string());
        }
    };

    let (error, chart_uri) = match state.service.render(&query).await {
        Ok(chart) => (None, Some(chart.data_uri())),
        Err(error) => (Some(error_banner(&error)), None),
    };

    let page = StockPage {
        error: error.as_deref(),
        chart_uri: chart_uri.as_deref(),
        ..StockPage::blank(&state.catalog, &form)
    };
    Html(page.to_string())
}
