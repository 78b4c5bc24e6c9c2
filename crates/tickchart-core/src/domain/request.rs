use crate::{ChartError, QuoteDate, Symbol, TimeSeriesFunction};

/// A validated request for one symbol's time series over a date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    symbol: Symbol,
    function: TimeSeriesFunction,
    start: QuoteDate,
    end: QuoteDate,
}

impl QuoteRequest {
    /// Builds a request, rejecting `start > end` for every granularity except
    /// intraday, which ignores the window entirely.
    pub fn new(
        symbol: Symbol,
        function: TimeSeriesFunction,
        start: QuoteDate,
        end: QuoteDate,
    ) -> Result<Self, ChartError> {
        if !function.is_intraday() && start > end {
            return Err(ChartError::InvalidRange { start, end });
        }

        Ok(Self {
            symbol,
            function,
            start,
            end,
        })
    }

    /// Parses both user-supplied dates, then validates as [`QuoteRequest::new`].
    pub fn parse(
        symbol: Symbol,
        function: TimeSeriesFunction,
        start: &str,
        end: &str,
    ) -> Result<Self, ChartError> {
        let start = QuoteDate::parse(start)?;
        let end = QuoteDate::parse(end)?;
        Self::new(symbol, function, start, end)
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub const fn function(&self) -> TimeSeriesFunction {
        self.function
    }

    pub const fn start(&self) -> QuoteDate {
        self.start
    }

    pub const fn end(&self) -> QuoteDate {
        self.end
    }

    /// Inclusive window check; the bounds are only meaningful off intraday.
    pub fn contains(&self, date: QuoteDate) -> bool {
        self.start <= date && date <= self.end
    }
}
