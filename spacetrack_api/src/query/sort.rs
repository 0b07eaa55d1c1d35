//! Ordering and row-limit directives.

use std::fmt;
use std::str::FromStr;

use crate::Error;

use super::field::QueryField;

/// Sort order for query results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (smallest/oldest first). This is the default.
    #[default]
    Asc,
    /// Descending order (largest/newest first).
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(Error::invalid(format!("unknown sort direction '{}'", s))),
        }
    }
}

/// One `orderby` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort<F: QueryField> {
    field: F,
    direction: SortDirection,
}

impl<F: QueryField> Sort<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: F) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: F) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    pub fn field(&self) -> F {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// `FIELD asc` or `FIELD desc`.
    pub fn render_parameter(&self) -> String {
        format!("{} {}", self.field.wire_name(), self.direction)
    }
}

/// Maximum row count, optionally skipping the first `offset` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limit {
    max_results: i64,
    offset: Option<i64>,
}

impl Limit {
    /// Fails if `max_results` is not positive.
    pub fn new(max_results: i64) -> Result<Self, Error> {
        if max_results <= 0 {
            return Err(Error::invalid(format!(
                "limit must be positive, got {}",
                max_results
            )));
        }
        Ok(Self {
            max_results,
            offset: None,
        })
    }

    /// Fails if `max_results` is not positive or `offset` is negative.
    pub fn with_offset(max_results: i64, offset: i64) -> Result<Self, Error> {
        if offset < 0 {
            return Err(Error::invalid(format!(
                "limit offset must not be negative, got {}",
                offset
            )));
        }
        Ok(Self {
            offset: Some(offset),
            ..Self::new(max_results)?
        })
    }

    pub fn max_results(&self) -> i64 {
        self.max_results
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// `limit/N` or `limit/N,O`.
    pub fn render_parameter(&self) -> String {
        match self.offset {
            Some(offset) => format!("limit/{},{}", self.max_results, offset),
            None => format!("limit/{}", self.max_results),
        }
    }
}
