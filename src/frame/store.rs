//! Typed column storage shared by every view of a frame.

use log::{debug, warn};
use std::{collections::HashMap, time::Instant};

use crate::{
    frame::{
        CellError, FrameError, MultiError,
        column::{Column, ColumnType},
        raw::RawRow,
        schema::{Config, Schema},
        workers::Workers,
    },
    helpers::parallel::{fill_chunks, try_fill_chunks},
};

/// Schema plus one fully built column per schema name.
///
/// Existing columns never change; the only mutation is [`Store::append`].
#[derive(Debug)]
pub struct Store {
    schema: Schema,
    columns: HashMap<String, Column>,
    row_count: usize,
}

impl Store {
    /// Builds every column of `raw` as described by `config`.
    ///
    /// Fails as a whole: either all columns parse or no store is returned.
    pub fn build<R: RawRow>(raw: &[R], config: &Config) -> Result<Self, FrameError> {
        let started = Instant::now();
        let schema = Schema::from_config(raw, config)?;

        let data = if config.first_row_is_header {
            &raw[1..]
        } else {
            raw
        };
        check_widths(data, schema.len())?;

        let mut columns = HashMap::with_capacity(schema.len());
        for (col_idx, (name, column_type)) in schema.iter().enumerate() {
            let column = build_column(data, col_idx, name, column_type, config.workers)
                .inspect_err(|e| {
                    warn!("column {name:?}: {} chunk(s) failed to parse", e.len());
                })?;
            columns.insert(name.to_string(), column);
        }

        let row_count = schema
            .names()
            .first()
            .and_then(|name| columns.get(name))
            .map_or(0, Column::len);

        debug!(
            "built store with {} rows x {} columns using {} workers in {:?}",
            row_count,
            schema.len(),
            config.workers.get(),
            started.elapsed()
        );

        Ok(Store {
            schema,
            columns,
            row_count,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Adds a new column at the end of the schema.
    ///
    /// The column must have exactly [`Store::row_count`] rows.
    pub fn append(&mut self, name: String, column: Column) -> Result<(), FrameError> {
        if column.len() != self.row_count {
            return Err(FrameError::ColumnLengthMismatch {
                expected: self.row_count,
                actual: column.len(),
            });
        }
        self.schema.push(name.clone(), column.column_type())?;
        self.columns.insert(name, column);
        Ok(())
    }
}

fn check_widths<R: RawRow>(data: &[R], expected: usize) -> Result<(), FrameError> {
    match data.iter().position(|row| row.width() != expected) {
        Some(row) => Err(FrameError::InvalidColumnCount {
            row,
            expected,
            actual: data[row].width(),
        }),
        None => Ok(()),
    }
}

/// Builds column `col_idx` of `data` in `workers` disjoint row chunks.
pub fn build_column<R: RawRow>(
    data: &[R],
    col_idx: usize,
    name: &str,
    column_type: ColumnType,
    workers: Workers,
) -> Result<Column, MultiError> {
    match column_type {
        ColumnType::Text => {
            let mut values = vec![String::new(); data.len()];
            fill_chunks(&mut values, workers, |offset, chunk| {
                for (i, slot) in chunk.iter_mut().enumerate() {
                    *slot = data[offset + i].cell(col_idx).to_string();
                }
            });
            Ok(Column::Text(values.into()))
        }
        ColumnType::Numeric => {
            let mut values = vec![f64::NAN; data.len()];
            try_fill_chunks(&mut values, workers, |offset, chunk| {
                for (i, slot) in chunk.iter_mut().enumerate() {
                    let row = offset + i;
                    let cell = data[row].cell(col_idx);
                    *slot = parse_numeric(cell).map_err(|reason| CellError {
                        row,
                        column: name.to_string(),
                        value: cell.to_string(),
                        reason,
                    })?;
                }
                Ok(())
            })?;
            Ok(Column::Numeric(values.into()))
        }
    }
}

/// Empty cells are NaN; anything else must be a complete float literal.
pub fn parse_numeric(cell: &str) -> Result<f64, String> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    fast_float::parse::<f64, _>(cell).map_err(|e| e.to_string())
}
