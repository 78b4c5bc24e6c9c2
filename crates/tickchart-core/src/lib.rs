//! # Tickchart Core
//!
//! Fetches a stock's price history from an Alpha Vantage style quote API and
//! turns it into a bar or line chart.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Dates, symbols, granularities and validated requests |
//! | [`query`] | Query parameters for the quote API |
//! | [`http_client`] | HTTP transport abstraction (reqwest in production) |
//! | [`client`] | Quote API client with status and in-band error detection |
//! | [`filter`] | Date-window filtering of the returned series |
//! | [`chart`] | Reshaping a series into label and price sequences |
//! | [`render`] | SVG rendering and data URIs |
//! | [`service`] | The end-to-end pipeline |
//! | [`error`] | [`ChartError`] and its [`ErrorKind`] classes |
//!
//! ## Pipeline
//!
//! ```text
//! ChartQuery ──▶ QuoteRequest ──▶ ApiClient ──▶ filter_series ──▶ ChartData ──▶ RenderedChart
//!   (form)      (dates, window)   (GET + checks)  (window)         (sequences)     (SVG)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickchart_core::{
//!     ApiClient, ApiConfig, ChartKind, ChartQuery, ChartService, Symbol, TimeSeriesFunction,
//! };
//!
//! let service = ChartService::new(ApiClient::new(ApiConfig::new(api_key, api_url)));
//! let chart = service
//!     .render(&ChartQuery {
//!         symbol: Symbol::parse("IBM")?,
//!         function: TimeSeriesFunction::Daily,
//!         chart_kind: ChartKind::Line,
//!         start_date: String::from("2023-01-01"),
//!         end_date: String::from("2023-01-31"),
//!     })
//!     .await?;
//! println!("<embed src=\"{}\">", chart.data_uri());
//! ```
//!
//! ## Error Handling
//!
//! Every stage returns [`ChartError`]. Its `Display` output is written for
//! end users; [`ChartError::kind`] separates bad input from upstream failures
//! and from upstream layout changes:
//!
//! ```rust
//! use tickchart_core::{ChartError, ErrorKind};
//!
//! fn severity(error: &ChartError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::UserInput => "info",
//!         ErrorKind::Upstream => "warn",
//!         ErrorKind::Contract => "error",
//!     }
//! }
//!
//! assert_eq!(severity(&ChartError::EmptyResult), "info");
//! ```

pub mod chart;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod query;
pub mod render;
pub mod service;

pub use chart::ChartData;
pub use client::{decode_response, ApiClient, ERROR_MESSAGE_KEY};
pub use config::{ApiConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};
pub use domain::{QuoteDate, QuoteRequest, Symbol, TimeSeriesFunction, INTRADAY_INTERVAL};
pub use error::{ChartError, ErrorKind};
pub use filter::{filter_series, FilteredSeries, SeriesEntry};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use query::QueryParameters;
pub use render::{chart_title, escape_markup, render_chart, ChartKind, RenderedChart};
pub use service::{ChartQuery, ChartService};
