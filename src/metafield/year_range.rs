//! Year range parsing: turns strings like `"2010-2015"` or `"2010 - Current"`
//! into the explicit list of years written to the metafield.

use chrono::{Datelike, Local};
use thiserror::Error;

/// Literal accepted in place of the end year.
pub const CURRENT_TOKEN: &str = "current";

/// Upper bound on the number of years a single range may expand to.
pub const MAX_YEAR_SPAN: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: u32,
    end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid year range {input:?}")]
pub struct InvalidYearRange {
    pub input: String,
}

impl YearRange {
    /// Parse against the host clock's current (local) year.
    pub fn parse(input: &str) -> Result<Self, InvalidYearRange> {
        let current_year = u32::try_from(Local::now().year()).unwrap_or(0);
        Self::parse_at(input, current_year)
    }

    /// Parse with an explicit value for `current`.
    ///
    /// Whitespace is dropped and case folded before splitting on `-`. Only the
    /// first two segments are read; anything after a second `-` is ignored.
    pub fn parse_at(input: &str, current_year: u32) -> Result<Self, InvalidYearRange> {
        let invalid = || InvalidYearRange {
            input: input.to_string(),
        };

        let normalized: String = input
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\u{feff}')
            .collect();

        let mut parts = normalized.split('-');
        let start_token = parts.next().ok_or_else(invalid)?;
        let end_token = parts.next().ok_or_else(invalid)?;

        let start = parse_year(start_token).ok_or_else(invalid)?;
        let end = if end_token == CURRENT_TOKEN {
            current_year
        } else {
            parse_year(end_token).ok_or_else(invalid)?
        };

        // compatibility: the span cap is stricter than a plain `start <= end`
        // check; it bounds the expanded list.
        if start == 0 || start > end || end - start >= MAX_YEAR_SPAN {
            return Err(invalid());
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Inclusive, ascending.
    pub fn years(&self) -> YearList {
        YearList((self.start..=self.end).collect())
    }
}

fn parse_year(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok()
}

/// Consecutive years in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearList(Vec<u32>);

impl YearList {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }

    /// Metafield text form: `"2010,2011,2012"`.
    pub fn to_metafield_value(&self) -> String {
        self.0
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
