//! The stock chart form and its field validation.

use std::collections::BTreeMap;

use serde::Deserialize;
use tickchart_core::{ChartKind, ChartQuery, TimeSeriesFunction};

use crate::symbols::SymbolCatalog;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_CHOICE: &str = "Not a valid choice.";

/// Raw form submission. Missing fields deserialize as empty strings so that
/// validation, not extraction, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StockForm {
    pub symbol: String,
    pub chart_type: String,
    pub time_series: String,
    pub start_date: String,
    pub end_date: String,
}

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl StockForm {
    /// Checks every field and, when all pass, converts the submission into a
    /// [`ChartQuery`]. Dates are only checked for presence here; parsing them
    /// is the pipeline's job.
    pub fn validate(&self, catalog: &SymbolCatalog) -> Result<ChartQuery, FormErrors> {
        let mut errors = FormErrors::default();

        let symbol = choice(&mut errors, "symbol", &self.symbol, |raw| {
            catalog.find(raw).cloned()
        });
        let chart_kind = choice(&mut errors, "chart_type", &self.chart_type, |raw| {
            ChartKind::ALL
                .into_iter()
                .find(|kind| kind.code().to_string() == raw)
        });
        let function = choice(&mut errors, "time_series", &self.time_series, |raw| {
            TimeSeriesFunction::ALL
                .into_iter()
                .find(|function| function.code().to_string() == raw)
        });
        let start_date = present(&mut errors, "start_date", &self.start_date);
        let end_date = present(&mut errors, "end_date", &self.end_date);

        match (symbol, chart_kind, function, start_date, end_date) {
            (Some(symbol), Some(chart_kind), Some(function), Some(start_date), Some(end_date))
                if errors.is_empty() =>
            {
                Ok(ChartQuery {
                    symbol,
                    function,
                    chart_kind,
                    start_date,
                    end_date,
                })
            }
            _ => Err(errors),
        }
    }
}

fn present(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.insert(field, REQUIRED);
        return None;
    }
    Some(trimmed.to_owned())
}

fn choice<T>(
    errors: &mut FormErrors,
    field: &'static str,
    raw: &str,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let value = present(errors, field, raw)?;
    let found = lookup(&value);
    if found.is_none() {
        errors.insert(field, INVALID_CHOICE);
    }
    found
}
