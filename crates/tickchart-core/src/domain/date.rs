use std::fmt::{Display, Formatter};
use std::str::FromStr;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ChartError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month padding:none]-[day padding:none]");

/// Naive calendar day in `YYYY-MM-DD` form, no timezone attached.
///
/// Month and day may be written with one or two digits; the year is always
/// four unsigned digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuoteDate(Date);

impl QuoteDate {
    pub fn parse(input: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidDate {
            value: input.to_owned(),
        };

        // `[year]` tolerates a leading sign.
        if !input.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid());
        }

        Date::parse(input, DATE_FORMAT).map(Self).map_err(|_| invalid())
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }
}

impl Display for QuoteDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for QuoteDate {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for QuoteDate {
    type Error = ChartError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
