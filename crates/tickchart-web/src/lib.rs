//! Web front end for tickchart: a single form page that charts a stock's
//! price history.
//!
//! [`routes::router`] serves the page on `/` and `/stocks`. A POST validates
//! the [`form::StockForm`] against the [`symbols::SymbolCatalog`] allow-list,
//! runs the chart pipeline and embeds the resulting SVG, or shows the
//! pipeline's error message in its place.

pub mod cli;
pub mod error;
pub mod form;
pub mod page;
pub mod routes;
pub mod symbols;

pub use cli::ServerArgs;
pub use error::WebError;
pub use form::{FormErrors, StockForm};
pub use page::StockPage;
pub use routes::{error_banner, router, AppState};
pub use symbols::SymbolCatalog;
