//! HTML for the single stock chart page.

use std::fmt::{Display, Formatter};

use tickchart_core::{escape_markup, ChartKind, TimeSeriesFunction};

use crate::form::{FormErrors, StockForm};
use crate::symbols::SymbolCatalog;

/// Everything the page shows for one response.
pub struct StockPage<'a> {
    pub catalog: &'a SymbolCatalog,
    pub form: &'a StockForm,
    pub field_errors: Option<&'a FormErrors>,
    pub error: Option<&'a str>,
    pub chart_uri: Option<&'a str>,
}

impl<'a> StockPage<'a> {
    pub fn blank(catalog: &'a SymbolCatalog, form: &'a StockForm) -> Self {
        Self {
            catalog,
            form,
            field_errors: None,
            error: None,
            chart_uri: None,
        }
    }

    fn field_error(&self, field: &str) -> Option<&'static str> {
        self.field_errors.and_then(|errors| errors.get(field))
    }

    fn write_select(
        &self,
        f: &mut Formatter<'_>,
        name: &str,
        label: &str,
        current: &str,
        options: &[(String, String)],
    ) -> std::fmt::Result {
        writeln!(f, r#"<div class="field"><label for="{name}">{label}</label>"#)?;
        writeln!(f, r#"<select id="{name}" name="{name}">"#)?;
        for (value, text) in options {
            let selected = if value == current { " selected" } else { "" };
            writeln!(
                f,
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_markup(value),
                escape_markup(text)
            )?;
        }
        writeln!(f, "</select>")?;
        self.write_field_error(f, name)?;
        writeln!(f, "</div>")
    }

    fn write_date(
        &self,
        f: &mut Formatter<'_>,
        name: &str,
        label: &str,
        current: &str,
    ) -> std::fmt::Result {
        writeln!(f, r#"<div class="field"><label for="{name}">{label}</label>"#)?;
        writeln!(
            f,
            r#"<input type="date" id="{name}" name="{name}" value="{}">"#,
            escape_markup(current)
        )?;
        self.write_field_error(f, name)?;
        writeln!(f, "</div>")
    }

    fn write_field_error(&self, f: &mut Formatter<'_>, name: &str) -> std::fmt::Result {
        if let Some(message) = self.field_error(name) {
            writeln!(f, r#"<span class="field-error">{message}</span>"#)?;
        }
        Ok(())
    }
}

impl Display for StockPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbols = self
            .catalog
            .iter()
            .map(|symbol| (symbol.to_string(), symbol.to_string()))
            .collect::<Vec<_>>();
        let chart_types = ChartKind::ALL
            .iter()
            .map(|kind| (kind.code().to_string(), format!("{}. {}", kind.code(), kind.label())))
            .collect::<Vec<_>>();
        let time_series = TimeSeriesFunction::ALL
            .iter()
            .map(|function| {
                let code = function.code();
                (code.to_string(), format!("{code}. {}", function.label()))
            })
            .collect::<Vec<_>>();

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en"><head><meta charset="utf-8">"#)?;
        writeln!(f, "<title>Stock Data Visualizer</title></head><body>")?;
        writeln!(f, "<h1>Stock Data Visualizer</h1>")?;
        writeln!(f, r#"<form method="post" action="/stocks">"#)?;

        self.write_select(f, "symbol", "Choose Stock Symbol", &self.form.symbol, &symbols)?;
        self.write_select(f, "chart_type", "Select Chart Type", &self.form.chart_type, &chart_types)?;
        self.write_select(
            f,
            "time_series",
            "Select Time Series",
            &self.form.time_series,
            &time_series,
        )?;
        self.write_date(f, "start_date", "Enter Start Date", &self.form.start_date)?;
        self.write_date(f, "end_date", "Enter End Date", &self.form.end_date)?;

        writeln!(f, r#"<input type="submit" value="Submit"></form>"#)?;

        if let Some(error) = self.error {
            writeln!(f, r#"<p class="error">{}</p>"#, escape_markup(error))?;
        }
        if let Some(uri) = self.chart_uri {
            writeln!(
                f,
                r#"<div class="chart"><embed type="image/svg+xml" src="{uri}"></div>"#
            )?;
        }

        writeln!(f, "</body></html>")
    }
}
