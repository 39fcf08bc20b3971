//! Sheet cells and the display policy shared by every card.
//!
//! Deltas render as `+N` / `-N`, with zero or a missing value shown as `-`.
//! Percentages append `%`. Missing scalars render as `-`. Previous ranks
//! render as `N위`. Counts shown as text get thousands separators.

use std::fmt;

use serde_json::Value;

pub use pocket_core::format::thousands;

/// One worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

/// Rows of one sheet, top to bottom.
pub type Rows = Vec<Vec<Cell>>;

/// Build a row from anything convertible into [`Cell`].
#[macro_export]
macro_rules! row {
    () => { Vec::<$crate::Cell>::new() };
    ($($cell:expr),+ $(,)?) => { vec![$($crate::Cell::from($cell)),+] };
}

pub const MISSING: &str = "-";

impl Cell {
    #[must_use]
    pub fn dash() -> Self {
        Self::Text(MISSING.to_string())
    }

    /// `value` or `-` when absent.
    #[must_use]
    pub fn or_dash<T: Into<Self>>(value: Option<T>) -> Self {
        value.map_or_else(Self::dash, Into::into)
    }

    /// Cell for an arbitrary JSON value: strings and numbers keep their type,
    /// `null` is empty, anything else is compact JSON text.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => n.as_f64().map_or_else(|| Self::Text(n.to_string()), Self::Number),
            other => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&number_text(*n)),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u64> for Cell {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Cell {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Number as the dashboard prints it: integers without a fraction.
#[must_use]
pub fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Rank delta: `+3`, `-2`, and `-` for zero or missing.
#[must_use]
pub fn delta(value: Option<i64>) -> Cell {
    match value {
        Some(n) if n > 0 => Cell::Text(format!("+{n}")),
        Some(n) if n < 0 => Cell::Text(n.to_string()),
        _ => Cell::dash(),
    }
}

#[must_use]
pub fn percent(value: Option<f64>) -> Cell {
    value.map_or_else(Cell::dash, |v| Cell::Text(format!("{}%", number_text(v))))
}

/// Previous rank as `N위`.
#[must_use]
pub fn prev_rank(value: Option<u32>) -> Cell {
    value.map_or_else(Cell::dash, |v| Cell::Text(format!("{v}위")))
}
