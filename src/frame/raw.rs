/// One row of the raw string matrix a frame is built from.
///
/// Implemented for vectors, arrays and slices of string-likes, and for
/// `csv::StringRecord`, so readers can hand their records over unchanged.
pub trait RawRow: Sync {
    fn width(&self) -> usize;

    fn cell(&self, idx: usize) -> &str;
}

impl<S: AsRef<str> + Sync> RawRow for Vec<S> {
    fn width(&self) -> usize {
        self.len()
    }

    fn cell(&self, idx: usize) -> &str {
        self[idx].as_ref()
    }
}

impl<S: AsRef<str> + Sync, const N: usize> RawRow for [S; N] {
    fn width(&self) -> usize {
        N
    }

    fn cell(&self, idx: usize) -> &str {
        self[idx].as_ref()
    }
}

impl<S: AsRef<str> + Sync> RawRow for &[S] {
    fn width(&self) -> usize {
        self.len()
    }

    fn cell(&self, idx: usize) -> &str {
        self[idx].as_ref()
    }
}

impl RawRow for csv::StringRecord {
    fn width(&self) -> usize {
        self.len()
    }

    fn cell(&self, idx: usize) -> &str {
        &self[idx]
    }
}
