//! CSV ingestion: turns CSV text into the raw matrix a [`DataFrame`] is built from.

use log::debug;
use memmap2::Mmap;
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::frame::{FrameError, data_frame::DataFrame, schema::Config};

/// Reads every record from `reader` and builds a frame from them.
///
/// The reader does not treat any row as a header; `config.first_row_is_header`
/// decides that. Records of differing widths are rejected by the CSV reader.
pub fn read_csv<R: Read>(reader: R, config: &Config) -> Result<DataFrame, FrameError> {
    let records = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader)
        .into_records()
        .collect::<Result<Vec<_>, _>>()?;
    debug!("read {} CSV records", records.len());
    DataFrame::new(&records, config)
}

/// Memory-maps the file at `path` and reads it with [`read_csv`].
///
/// `path` must be a local file; `http://` and `https://` URLs are not
/// fetched. Download remote CSV yourself and hand the body to [`read_csv`].
///
/// # Example
/// ```rust,no_run
/// # use columnar_frame::{ColumnType, Config, read_csv_file};
/// let config = Config::new(vec![ColumnType::Text, ColumnType::Numeric]).with_header_row();
/// let df = read_csv_file("data.csv", &config).unwrap();
/// println!("{}", df.head(5));
/// ```
pub fn read_csv_file(path: impl AsRef<Path>, config: &Config) -> Result<DataFrame, FrameError> {
    let file = File::open(path.as_ref())?;
    if file.metadata()?.len() == 0 {
        return read_csv(io::empty(), config);
    }
    // SAFETY: the map is read-only and dropped before returning; the file is
    // not expected to be truncated while it is being parsed.
    let mmap = unsafe { Mmap::map(&file)? };
    read_csv(&mmap[..], config)
}
