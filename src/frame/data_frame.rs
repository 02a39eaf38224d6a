use log::{debug, warn};
use parking_lot::RwLock;
use std::{fmt, sync::Arc};

use crate::{
    frame::{
        CellError, FrameError,
        column::{Column, ColumnSlice, ColumnType},
        raw::RawRow,
        schema::Config,
        store::Store,
        workers::Workers,
    },
    helpers::parallel::{fill_chunks, try_fill_chunks},
};

/// Rows printed by [`DataFrame::render`]; the rest is silently left out.
pub const MAX_RENDER_ROWS: usize = 20;

/// A row window `[from, to)` over a shared column store.
///
/// Cloning, [`head`](DataFrame::head) and [`tail`](DataFrame::tail) never copy
/// column data. Columns appended through any view are visible to all views of
/// the same store.
///
/// # Examples
///
/// ```rust
/// use columnar_frame::{ColumnType, Config, DataFrame};
///
/// let raw = [["id", "score"], ["1", "10.5"], ["2", ""]];
/// let config = Config::new(vec![ColumnType::Text, ColumnType::Numeric]).with_header_row();
/// let df = DataFrame::new(&raw, &config).unwrap();
///
/// assert_eq!(df.row_count(), 2);
/// let score = df.numeric_column("score").unwrap();
/// assert_eq!(score[0], 10.5);
/// assert!(score[1].is_nan());
/// ```
#[derive(Debug, Clone)]
pub struct DataFrame {
    store: Arc<RwLock<Store>>,
    from_row_idx: usize, // inclusive
    to_row_idx: usize,   // exclusive
    workers: Workers,
}

impl DataFrame {
    /// Builds a frame from a raw string matrix.
    ///
    /// # Errors
    /// Returns a [`FrameError`] if:
    /// - the header row is requested but `raw` is empty
    /// - names and types differ in length, or a name repeats
    /// - a data row's width differs from the number of columns
    /// - numeric cells fail to parse ([`FrameError::Aggregated`])
    pub fn new<R: RawRow>(raw: &[R], config: &Config) -> Result<Self, FrameError> {
        let store = Store::build(raw, config)?;
        let to_row_idx = store.row_count();
        Ok(DataFrame {
            store: Arc::new(RwLock::new(store)),
            from_row_idx: 0,
            to_row_idx,
            workers: config.workers,
        })
    }

    pub fn row_count(&self) -> usize {
        self.to_row_idx - self.from_row_idx
    }

    pub fn column_count(&self) -> usize {
        self.store.read().schema().len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.store.read().schema().names().to_vec()
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.store.read().schema().column_type(name)
    }

    pub fn workers(&self) -> Workers {
        self.workers
    }

    /// Same window, different fan-out for later operations on this view.
    pub fn with_workers(mut self, workers: Workers) -> Self {
        self.workers = workers;
        self
    }

    /// `true` if both views read the same underlying store.
    pub fn shares_store_with(&self, other: &DataFrame) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    /// First `n` rows of this view.
    pub fn head(&self, n: usize) -> DataFrame {
        let to_row_idx = self.from_row_idx.saturating_add(n).min(self.to_row_idx);
        self.window(self.from_row_idx, to_row_idx)
    }

    /// Last `n` rows of this view.
    pub fn tail(&self, n: usize) -> DataFrame {
        let from_row_idx = self.to_row_idx.saturating_sub(n).max(self.from_row_idx);
        self.window(from_row_idx, self.to_row_idx)
    }

    fn window(&self, from_row_idx: usize, to_row_idx: usize) -> DataFrame {
        DataFrame {
            store: Arc::clone(&self.store),
            from_row_idx,
            to_row_idx,
            workers: self.workers,
        }
    }

    /// Header line followed by at most [`MAX_RENDER_ROWS`] rows.
    ///
    /// Numeric cells print with 8 decimals; NaN prints as `NaN` and
    /// infinities as `+Inf` / `-Inf`.
    pub fn render(&self) -> String {
        let store = self.store.read();
        let names = store.schema().names();

        let mut out = names.join(" ");
        out.push('\n');
        for i in 0..self.row_count().min(MAX_RENDER_ROWS) {
            if i > 0 {
                out.push('\n');
            }
            for (j, name) in names.iter().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                if let Some(column) = store.column(name) {
                    column.write_cell(&mut out, self.from_row_idx + i);
                }
            }
        }
        out
    }

    /// Numeric column `name`, restricted to this view's rows.
    pub fn numeric_column(&self, name: &str) -> Result<ColumnSlice<f64>, FrameError> {
        let values = self.shared_numeric(name)?;
        Ok(ColumnSlice::new(values, self.from_row_idx, self.to_row_idx))
    }

    /// Text column `name`, restricted to this view's rows.
    pub fn text_column(&self, name: &str) -> Result<ColumnSlice<String>, FrameError> {
        let values = self.shared_text(name)?;
        Ok(ColumnSlice::new(values, self.from_row_idx, self.to_row_idx))
    }

    fn shared_numeric(&self, name: &str) -> Result<Arc<[f64]>, FrameError> {
        match self.store.read().column(name) {
            Some(Column::Numeric(values)) => Ok(Arc::clone(values)),
            _ => Err(FrameError::ColumnNotFound(name.to_string())),
        }
    }

    fn shared_text(&self, name: &str) -> Result<Arc<[String]>, FrameError> {
        match self.store.read().column(name) {
            Some(Column::Text(values)) => Ok(Arc::clone(values)),
            _ => Err(FrameError::ColumnNotFound(name.to_string())),
        }
    }

    /// Converts the whole text column `source` with `convert` and appends the
    /// result as numeric column `name`.
    ///
    /// The conversion covers every row of the store, not just this view.
    /// If any chunk fails the store is left untouched and all chunk failures
    /// are returned together.
    pub fn append_numeric_column_from_text<F, E>(
        &self,
        name: &str,
        source: &str,
        convert: F,
    ) -> Result<(), FrameError>
    where
        F: Fn(&str) -> Result<f64, E> + Sync,
        E: fmt::Display,
    {
        if self.store.read().schema().contains(name) {
            return Err(FrameError::ColumnAlreadyExists(name.to_string()));
        }
        let source_values = self.shared_text(source)?;

        let mut values = vec![f64::NAN; source_values.len()];
        try_fill_chunks(&mut values, self.workers, |offset, chunk| {
            for (i, slot) in chunk.iter_mut().enumerate() {
                let row = offset + i;
                let cell = source_values[row].as_str();
                *slot = convert(cell).map_err(|e| CellError {
                    row,
                    column: name.to_string(),
                    value: cell.to_string(),
                    reason: e.to_string(),
                })?;
            }
            Ok(())
        })
        .inspect_err(|e| warn!("deriving {name:?} from {source:?}: {} chunk(s) failed", e.len()))?;

        // Re-checked under the write lock by `Store::append`.
        self.store
            .write()
            .append(name.to_string(), Column::Numeric(values.into()))?;
        debug!("appended numeric column {name:?} derived from {source:?}");
        Ok(())
    }

    /// Row-major matrix of the given numeric columns over this view's rows.
    pub fn numeric_values(&self, names: &[&str]) -> Result<Vec<Vec<f64>>, FrameError> {
        let columns = names
            .iter()
            .map(|name| self.shared_numeric(name))
            .collect::<Result<Vec<_>, _>>()?;

        let from_row_idx = self.from_row_idx;
        let mut rows = vec![Vec::new(); self.row_count()];
        fill_chunks(&mut rows, self.workers, |offset, chunk| {
            for (i, row) in chunk.iter_mut().enumerate() {
                let r = from_row_idx + offset + i;
                *row = columns.iter().map(|column| column[r]).collect();
            }
        });
        Ok(rows)
    }

    /// Exports this view's rows as an Arrow schema and chunk.
    #[cfg(feature = "arrow")]
    pub fn to_arrow(
        &self,
    ) -> (
        arrow2::datatypes::Schema,
        arrow2::chunk::Chunk<Arc<dyn arrow2::array::Array>>,
    ) {
        use arrow2::{
            array::{Array, Float64Array, Utf8Array},
            chunk::Chunk,
            datatypes::{DataType, Field, Schema},
        };

        let store = self.store.read();
        let range = self.from_row_idx..self.to_row_idx;

        let mut fields = Vec::with_capacity(store.schema().len());
        let mut arrays: Vec<Arc<dyn Array>> = Vec::with_capacity(store.schema().len());
        for (name, _) in store.schema().iter() {
            match store.column(name) {
                Some(Column::Numeric(values)) => {
                    fields.push(Field::new(name, DataType::Float64, true));
                    arrays.push(Arc::new(Float64Array::from_slice(&values[range.clone()])));
                }
                Some(Column::Text(values)) => {
                    fields.push(Field::new(name, DataType::Utf8, true));
                    arrays.push(Arc::new(Utf8Array::<i32>::from_slice(&values[range.clone()])));
                }
                None => {}
            }
        }

        (Schema::from(fields), Chunk::new(arrays))
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
