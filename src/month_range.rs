use crate::error::CollectError;
use std::fmt;

/// Calendar month in `YYYYMM` encoding, as the listing query expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(u32);

impl YearMonth {
    pub fn new(ym: u32) -> Result<Self, CollectError> {
        let month = ym % 100;

        if !(1..=12).contains(&month) {
            return Err(CollectError::InvalidYearMonth(ym));
        }

        Ok(Self(ym))
    }

    pub fn year(self) -> u32 {
        self.0 / 100
    }

    pub fn month(self) -> u32 {
        self.0 % 100
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    fn next(self) -> Self {
        if self.month() == 12 {
            Self(self.0 + 100 - 11)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every month from `start` to `end` inclusive, in calendar order.
/// Empty when `start` is after `end`.
pub fn month_range(start: YearMonth, end: YearMonth) -> MonthRange {
    MonthRange {
        current: start,
        end,
    }
}

#[derive(Debug, Clone)]
pub struct MonthRange {
    current: YearMonth,
    end: YearMonth,
}

impl Iterator for MonthRange {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        if self.current > self.end {
            return None;
        }

        let ym = self.current;
        self.current = ym.next();

        Some(ym)
    }
}
