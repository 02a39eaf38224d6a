//! Frame configuration and the column-name / column-type schema derived from it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::frame::{FrameError, column::ColumnType, raw::RawRow, workers::Workers};

/// How to interpret a raw string matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Column names, used when `first_row_is_header` is `false`
    #[serde(default)]
    pub column_names: Option<Vec<String>>,
    /// One type per column, in column order
    pub column_types: Vec<ColumnType>,
    /// Take the names from the first raw row and exclude it from the data
    #[serde(default)]
    pub first_row_is_header: bool,
    /// Fan-out of every parallel operation on the frame
    #[serde(default)]
    pub workers: Workers,
}

impl Config {
    pub fn new(column_types: Vec<ColumnType>) -> Self {
        Config {
            column_types,
            ..Default::default()
        }
    }

    pub fn with_column_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.column_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_header_row(mut self) -> Self {
        self.first_row_is_header = true;
        self
    }

    pub fn with_workers(mut self, workers: Workers) -> Self {
        self.workers = workers;
        self
    }

    /// Parses a JSON configuration.
    ///
    /// Unknown type tags fail with [`FrameError::InvalidType`]; any other
    /// malformed input fails with [`FrameError::Json`].
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(tags) = value.get("column_types").and_then(|t| t.as_array()) {
            for tag in tags.iter().filter_map(|t| t.as_str()) {
                tag.parse::<ColumnType>()?;
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Ordered column names plus the type of each name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    names: Vec<String>,
    types: HashMap<String, ColumnType>,
}

impl Schema {
    /// Resolves names from `config` (or the first raw row) and pairs them
    /// with the configured types.
    pub fn from_config<R: RawRow>(raw: &[R], config: &Config) -> Result<Self, FrameError> {
        let names = source_names(raw, config)?;
        Schema::new(names, &config.column_types)
    }

    /// Validates arity and uniqueness of `names` against `types`.
    pub fn new(names: Vec<String>, types: &[ColumnType]) -> Result<Self, FrameError> {
        if names.len() != types.len() {
            return Err(FrameError::InvalidTypesLength {
                names: names.len(),
                types: types.len(),
            });
        }

        let mut by_name = HashMap::with_capacity(names.len());
        for (name, column_type) in names.iter().zip(types) {
            if by_name.insert(name.clone(), *column_type).is_some() {
                return Err(FrameError::DuplicatedColumnName(name.clone()));
            }
        }

        Ok(Schema {
            names,
            types: by_name,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.types.get(name).copied()
    }

    /// Names and types in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> + '_ {
        self.names
            .iter()
            .map(|name| (name.as_str(), self.types[name.as_str()]))
    }

    pub(crate) fn push(&mut self, name: String, column_type: ColumnType) -> Result<(), FrameError> {
        if self.contains(&name) {
            return Err(FrameError::ColumnAlreadyExists(name));
        }
        self.types.insert(name.clone(), column_type);
        self.names.push(name);
        Ok(())
    }
}

// Owned copy of the names so later edits to the raw matrix or config don't leak in.
fn source_names<R: RawRow>(raw: &[R], config: &Config) -> Result<Vec<String>, FrameError> {
    if config.first_row_is_header {
        let header = raw.first().ok_or(FrameError::NoData)?;
        Ok((0..header.width())
            .map(|idx| header.cell(idx).to_string())
            .collect())
    } else {
        Ok(config.column_names.clone().unwrap_or_default())
    }
}
