//! # Domain Models
//!
//! Request-scoped value types shared by the pipeline stages.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`QuoteDate`] | Naive `YYYY-MM-DD` calendar day |
//! | [`Symbol`] | Normalized ticker symbol |
//! | [`TimeSeriesFunction`] | Granularity with its API function name and response key |
//! | [`QuoteRequest`] | Validated symbol + granularity + date window |
//!
//! All of them validate at construction, so a value that exists is usable:
//!
//! ```rust
//! use tickchart_core::{QuoteRequest, Symbol, TimeSeriesFunction};
//!
//! let symbol = Symbol::parse("ibm").unwrap();
//! let request =
//!     QuoteRequest::parse(symbol, TimeSeriesFunction::Daily, "2023-01-01", "2023-01-05").unwrap();
//! assert_eq!(request.symbol().as_str(), "IBM");
//! ```

mod date;
mod function;
mod request;
mod symbol;

pub use date::QuoteDate;
pub use function::{TimeSeriesFunction, INTRADAY_INTERVAL};
pub use request::QuoteRequest;
pub use symbol::Symbol;
