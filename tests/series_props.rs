//! Properties of the date parser and the series filter over generated input.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tickchart_core::{filter_series, QuoteDate, QuoteRequest, Symbol, TimeSeriesFunction};
use time::macros::date;
use time::{Date, Duration};

const FIRST_DAY: i32 = date!(0001 - 01 - 01).to_julian_day();
const LAST_DAY: i32 = date!(9999 - 12 - 31).to_julian_day();
const SERIES_BASE: Date = date!(2020 - 01 - 01);

fn iso(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn arb_date() -> impl Strategy<Value = Date> {
    (FIRST_DAY..=LAST_DAY)
        .prop_map(|day| Date::from_julian_day(day).expect("julian day within calendar range"))
}

/// Distinct day offsets from [`SERIES_BASE`] in arbitrary source order.
fn arb_offsets() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(0i64..1_000, 0..60)
        .prop_map(|offsets| offsets.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn arb_dated_function() -> impl Strategy<Value = TimeSeriesFunction> {
    prop::sample::select(vec![
        TimeSeriesFunction::Daily,
        TimeSeriesFunction::Weekly,
        TimeSeriesFunction::Monthly,
    ])
}

fn series_body(function: TimeSeriesFunction, labels: &[String]) -> Value {
    let mut series = Map::new();
    for label in labels {
        series.insert(
            label.clone(),
            json!({ "1. open": "10.0", "2. high": "12.0", "3. low": "9.0", "4. close": "11.0" }),
        );
    }
    let mut root = Map::new();
    root.insert(function.response_key().to_owned(), Value::Object(series));
    Value::Object(root)
}

fn request(function: TimeSeriesFunction, start: Date, end: Date) -> QuoteRequest {
    QuoteRequest::new(
        Symbol::parse("IBM").expect("valid symbol"),
        function,
        QuoteDate::parse(&iso(start)).expect("valid start"),
        QuoteDate::parse(&iso(end)).expect("valid end"),
    )
    .expect("valid request")
}

proptest! {
    #[test]
    fn formatted_dates_parse_back_to_the_same_day(day in arb_date()) {
        let text = iso(day);
        let parsed = QuoteDate::parse(&text).expect("formatted date parses");

        prop_assert_eq!(parsed.into_inner(), day);
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn unpadded_month_and_day_parse_like_padded(day in arb_date()) {
        let unpadded = format!("{:04}-{}-{}", day.year(), u8::from(day.month()), day.day());
        let parsed = QuoteDate::parse(&unpadded).expect("unpadded date parses");

        prop_assert_eq!(parsed.into_inner(), day);
    }

    #[test]
    fn dated_filter_keeps_exactly_the_in_window_entries_in_source_order(
        offsets in arb_offsets(),
        bounds in (0i64..1_000, 0i64..1_000),
        function in arb_dated_function(),
    ) {
        let (low, high) = if bounds.0 <= bounds.1 { bounds } else { (bounds.1, bounds.0) };
        let labels = offsets
            .iter()
            .map(|offset| iso(SERIES_BASE + Duration::days(*offset)))
            .collect::<Vec<_>>();
        let body = series_body(function, &labels);
        let request = request(
            function,
            SERIES_BASE + Duration::days(low),
            SERIES_BASE + Duration::days(high),
        );

        let filtered = filter_series(&body, &request).expect("series block present");

        let expected = offsets
            .iter()
            .zip(&labels)
            .filter(|(offset, _)| (low..=high).contains(*offset))
            .map(|(_, label)| label.as_str())
            .collect::<Vec<_>>();
        let kept = filtered.labels().collect::<Vec<_>>();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn intraday_filter_passes_every_entry_through(
        minutes in prop::collection::btree_set(0u32..1_440, 0..60)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        start in arb_date(),
        end in arb_date(),
    ) {
        let labels = minutes
            .iter()
            .map(|minute| format!("2023-01-05 {:02}:{:02}:00", minute / 60, minute % 60))
            .collect::<Vec<_>>();
        let body = series_body(TimeSeriesFunction::Intraday, &labels);
        let request = request(TimeSeriesFunction::Intraday, start, end);

        let filtered = filter_series(&body, &request).expect("series block present");

        let kept = filtered.labels().collect::<Vec<_>>();
        let expected = labels.iter().map(String::as_str).collect::<Vec<_>>();
        prop_assert_eq!(kept, expected);
    }
}
