use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref, str::FromStr, sync::Arc};

use crate::frame::FrameError;

/// Logical type of a column.
///
/// The set is closed: a `ColumnType` value is valid by construction, so type
/// validation happens where external tags (config files, CLI flags) are turned
/// into types. See [`ColumnType::is_valid_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColumnType {
    /// Cells are kept verbatim
    Text,
    /// Cells are parsed as `f64`, empty cells become NaN
    Numeric,
}

impl ColumnType {
    /// Returns `true` if `tag` names a supported column type.
    pub fn is_valid_tag(tag: &str) -> bool {
        tag.parse::<ColumnType>().is_ok()
    }

    /// Parses a comma separated list such as `"text,numeric"`.
    pub fn parse_list(list: &str) -> Result<Vec<ColumnType>, FrameError> {
        if list.trim().is_empty() {
            return Ok(Vec::new());
        }
        list.split(',').map(|tag| tag.trim().parse()).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Numeric => "numeric",
        }
    }
}

impl FromStr for ColumnType {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "string" | "str" => Ok(ColumnType::Text),
            "numeric" | "number" | "float" | "float64" | "f64" => Ok(ColumnType::Numeric),
            _ => Err(FrameError::InvalidType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ColumnType {
    type Error = FrameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColumnType> for String {
    fn from(value: ColumnType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built column. Storage is shared between every view of a frame.
#[derive(Debug, Clone)]
pub enum Column {
    Text(Arc<[String]>),
    Numeric(Arc<[f64]>),
}

impl Column {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Text(_) => ColumnType::Text,
            Column::Numeric(_) => ColumnType::Numeric,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Text(values) => values.len(),
            Column::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_text(&self) -> Option<&Arc<[String]>> {
        match self {
            Column::Text(values) => Some(values),
            Column::Numeric(_) => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&Arc<[f64]>> {
        match self {
            Column::Numeric(values) => Some(values),
            Column::Text(_) => None,
        }
    }

    /// Writes the cell at `row` the way `render` displays it.
    pub(crate) fn write_cell(&self, out: &mut String, row: usize) {
        use std::fmt::Write;

        match self {
            Column::Text(values) => out.push_str(&values[row]),
            Column::Numeric(values) => {
                let v = values[row];
                if v.is_infinite() {
                    out.push_str(if v > 0.0 { "+Inf" } else { "-Inf" });
                } else {
                    // Writing into a String never fails.
                    let _ = write!(out, "{v:.8}");
                }
            }
        }
    }
}

/// Read-only window `[from, to)` over shared column storage.
#[derive(Debug, Clone)]
pub struct ColumnSlice<T> {
    data: Arc<[T]>,
    from: usize,
    to: usize,
}

impl<T> ColumnSlice<T> {
    pub(crate) fn new(data: Arc<[T]>, from: usize, to: usize) -> Self {
        debug_assert!(from <= to && to <= data.len());
        ColumnSlice { data, from, to }
    }
}

impl<T> Deref for ColumnSlice<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data[self.from..self.to]
    }
}
