//! # ColumnarFrame
//!
//! `ColumnarFrame` is an in-memory, column-oriented data frame built from raw
//! string matrices (typically CSV records). It supports:
//!
//! - Schema from configuration or from the first raw row
//! - Text and numeric (`f64`) columns, empty numeric cells become NaN
//! - Parallel column parsing over disjoint row chunks with Rayon
//! - Aggregated reporting of every failed chunk
//! - Zero-copy `head` / `tail` windows over a shared store
//! - Numeric columns derived from text columns, visible to every view
//! - Row-major numeric extraction for plotting, NaN-skipping reductions
//!
//! # Example
//!
//! ```rust
//! use columnar_frame::{ColumnType, Config, DataFrame, Workers, stat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let raw = vec![
//!         vec!["city", "price"],
//!         vec!["Oslo", "$12.5"],
//!         vec!["Rome", "$8"],
//!         vec!["Lima", "$4.25"],
//!     ];
//!     let config = Config::new(vec![ColumnType::Text, ColumnType::Text])
//!         .with_header_row()
//!         .with_workers(Workers::new(2)?);
//!     let df = DataFrame::new(&raw, &config)?;
//!
//!     // Derive a numeric column from the text one
//!     df.append_numeric_column_from_text("usd", "price", |s| {
//!         s.trim_start_matches('$').parse::<f64>()
//!     })?;
//!
//!     let usd = df.numeric_column("usd")?;
//!     assert_eq!(stat::sum(&usd, df.workers()), 24.75);
//!     println!("{}", df.tail(2));
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod frame;
mod helpers;
pub mod ingest;
pub mod stat;

pub use crate::frame::{
    CellError, FrameError, MultiError,
    column::{Column, ColumnSlice, ColumnType},
    data_frame::{DataFrame, MAX_RENDER_ROWS},
    raw::RawRow,
    schema::{Config, Schema},
    workers::{Workers, set_default_workers},
};
pub use crate::ingest::{read_csv, read_csv_file};
