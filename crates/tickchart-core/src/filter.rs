//! Extraction of the requested window from a time series response.

use serde_json::{Map, Value};

use crate::{ChartError, QuoteDate, QuoteRequest};

/// One timestamped record from the series, fields untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub label: String,
    pub fields: Map<String, Value>,
}

/// Entries that survived filtering, in the order the API sent them
/// (newest first for every documented function).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSeries {
    entries: Vec<SeriesEntry>,
}

impl FilteredSeries {
    pub fn new(entries: Vec<SeriesEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }
}

impl<'a> IntoIterator for &'a FilteredSeries {
    type Item = &'a SeriesEntry;
    type IntoIter = std::slice::Iter<'a, SeriesEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Picks the series block for `request` out of `body` and keeps the entries
/// inside the request window.
///
/// Intraday series are passed through whole. A missing block means the
/// upstream response layout changed and is reported as
/// [`ChartError::SchemaMismatch`].
pub fn filter_series(body: &Value, request: &QuoteRequest) -> Result<FilteredSeries, ChartError> {
    let key = request.function().response_key();
    let series = body
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| ChartError::schema_mismatch(key))?;

    let mut entries = Vec::new();
    for (label, record) in series {
        if !request.function().is_intraday() {
            let date = QuoteDate::parse(label).map_err(|_| {
                ChartError::malformed(format!("series key '{label}' is not a date"))
            })?;
            if !request.contains(date) {
                continue;
            }
        }

        let fields = record.as_object().cloned().ok_or_else(|| {
            ChartError::malformed(format!("series entry '{label}' is not an object"))
        })?;

        entries.push(SeriesEntry {
            label: label.clone(),
            fields,
        });
    }

    Ok(FilteredSeries::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbol, TimeSeriesFunction};
    use serde_json::json;

    fn request(function: TimeSeriesFunction, start: &str, end: &str) -> QuoteRequest {
        QuoteRequest::parse(Symbol::parse("IBM").expect("valid"), function, start, end)
            .expect("valid request")
    }

    fn bar(close: &str) -> Value {
        json!({
            "1. open": "1.0",
            "2. high": "2.0",
            "3. low": "0.5",
            "4. close": close,
            "5. volume": "100"
        })
    }

    #[test]
    fn keeps_inclusive_window_in_source_order() {
        let body = json!({
            "Meta Data": {},
            "Time Series (Daily)": {
                "2023-01-06": bar("6"),
                "2023-01-05": bar("5"),
                "2023-01-03": bar("3"),
                "2023-01-01": bar("1"),
                "2022-12-30": bar("0")
            }
        });

        let filtered = filter_series(
            &body,
            &request(TimeSeriesFunction::Daily, "2023-01-01", "2023-01-05"),
        )
        .expect("filter succeeds");

        let labels = filtered.labels().collect::<Vec<_>>();
        assert_eq!(labels, vec!["2023-01-05", "2023-01-03", "2023-01-01"]);
    }

    #[test]
    fn intraday_passes_everything_through() {
        let body = json!({
            "Time Series (5min)": {
                "2023-03-01 16:00:00": bar("2"),
                "2023-03-01 15:55:00": bar("1")
            }
        });

        let filtered = filter_series(
            &body,
            &request(TimeSeriesFunction::Intraday, "1990-01-01", "1990-01-02"),
        )
        .expect("filter succeeds");

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn missing_series_key_is_schema_mismatch() {
        let body = json!({ "Time Series Daily": { "2023-01-02": bar("1") } });
        let error = filter_series(
            &body,
            &request(TimeSeriesFunction::Daily, "2023-01-01", "2023-01-05"),
        )
        .expect_err("renamed key must fail");

        assert_eq!(error, ChartError::schema_mismatch("Time Series (Daily)"));
    }

    #[test]
    fn each_granularity_reads_its_own_key() {
        let body = json!({ "Weekly Time Series": { "2023-01-06": bar("1") } });

        let weekly = filter_series(
            &body,
            &request(TimeSeriesFunction::Weekly, "2023-01-01", "2023-01-31"),
        )
        .expect("weekly key present");
        assert_eq!(weekly.len(), 1);

        let monthly = filter_series(
            &body,
            &request(TimeSeriesFunction::Monthly, "2023-01-01", "2023-01-31"),
        );
        assert!(matches!(monthly, Err(ChartError::SchemaMismatch { .. })));
    }

    #[test]
    fn window_with_no_entries_yields_empty_series() {
        let body = json!({ "Monthly Time Series": { "2020-01-31": bar("1") } });
        let filtered = filter_series(
            &body,
            &request(TimeSeriesFunction::Monthly, "2023-01-01", "2023-12-31"),
        )
        .expect("filter succeeds");

        assert!(filtered.is_empty());
    }

    #[test]
    fn undated_key_is_malformed() {
        let body = json!({ "Time Series (Daily)": { "yesterday": bar("1") } });
        let error = filter_series(
            &body,
            &request(TimeSeriesFunction::Daily, "2023-01-01", "2023-01-05"),
        )
        .expect_err("must fail");

        assert!(matches!(error, ChartError::MalformedResponse { .. }));
    }
}
