use std::fmt::{Display, Formatter};

/// Bar interval requested for intraday series.
pub const INTRADAY_INTERVAL: &str = "5min";

/// Time series granularity offered by the quote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSeriesFunction {
    Intraday,
    Daily,
    Weekly,
    Monthly,
}

impl TimeSeriesFunction {
    pub const ALL: [Self; 4] = [Self::Intraday, Self::Daily, Self::Weekly, Self::Monthly];

    /// Maps the numeric form code; anything unrecognized falls back to monthly.
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Intraday,
            2 => Self::Daily,
            3 => Self::Weekly,
            _ => Self::Monthly,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Intraday => 1,
            Self::Daily => 2,
            Self::Weekly => 3,
            Self::Monthly => 4,
        }
    }

    /// Value of the `function` query parameter.
    pub const fn api_function(self) -> &'static str {
        match self {
            Self::Intraday => "TIME_SERIES_INTRADAY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
        }
    }

    /// Top-level key holding the series in a successful response.
    pub const fn response_key(self) -> &'static str {
        match self {
            Self::Intraday => "Time Series (5min)",
            Self::Daily => "Time Series (Daily)",
            Self::Weekly => "Weekly Time Series",
            Self::Monthly => "Monthly Time Series",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Intraday => "Intraday",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::Intraday)
    }
}

impl Display for TimeSeriesFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_function())
    }
}
