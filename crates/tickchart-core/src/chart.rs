//! Reshaping a filtered series into chartable sequences.

use serde_json::Value;

use crate::{ChartError, FilteredSeries};

/// Parallel sequences handed to the renderer.
///
/// `labels` run oldest to newest. The price sequences keep the order the
/// series arrived in; see [`ChartData::assemble`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl ChartData {
    /// Splits each record into open/high/low/close by substring match on the
    /// field names (`"1. open"` feeds `open`), then reverses the labels once.
    ///
    /// Only the labels are reversed. The four price sequences stay in source
    /// order, so for a newest-first upstream the values are not aligned with
    /// their labels.
    // TODO: reverse the price sequences as well once product confirms the
    // chart should pair each label with its own record.
    pub fn assemble(series: &FilteredSeries) -> Result<Self, ChartError> {
        let mut data = Self::default();

        for entry in series {
            data.labels.push(entry.label.clone());
            for (name, value) in &entry.fields {
                if name.contains("open") {
                    data.open.push(price(&entry.label, name, value)?);
                }
                if name.contains("close") {
                    data.close.push(price(&entry.label, name, value)?);
                }
                if name.contains("high") {
                    data.high.push(price(&entry.label, name, value)?);
                }
                if name.contains("low") {
                    data.low.push(price(&entry.label, name, value)?);
                }
            }
        }

        data.labels.reverse();
        Ok(data)
    }

    /// Named series in legend order.
    pub fn series(&self) -> [(&'static str, &[f64]); 4] {
        [
            ("Open", self.open.as_slice()),
            ("High", self.high.as_slice()),
            ("Low", self.low.as_slice()),
            ("Close", self.close.as_slice()),
        ]
    }
}

fn price(label: &str, name: &str, value: &Value) -> Result<f64, ChartError> {
    let parsed = match value {
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Number(number) => number.as_f64(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        ChartError::malformed(format!("field '{name}' of '{label}' is not numeric: {value}"))
    })
}
