use rayon::prelude::*;

use crate::frame::{CellError, MultiError, workers::Workers};

/// Rows per chunk so that `len` rows split into at most `workers` chunks.
pub fn chunk_size(len: usize, workers: Workers) -> usize {
    len.div_ceil(workers.get()).max(1)
}

/// Fills `out` chunk by chunk, one rayon task per chunk.
///
/// `fill` receives the offset of its chunk within `out` and the disjoint
/// mutable chunk itself. Every chunk runs to completion (or to its own first
/// error) before this returns; failures of all chunks are gathered.
pub fn try_fill_chunks<T, F>(out: &mut [T], workers: Workers, fill: F) -> Result<(), MultiError>
where
    T: Send,
    F: Fn(usize, &mut [T]) -> Result<(), CellError> + Sync,
{
    let size = chunk_size(out.len(), workers);
    let errors: Vec<CellError> = out
        .par_chunks_mut(size)
        .enumerate()
        .filter_map(|(chunk_idx, chunk)| fill(chunk_idx * size, chunk).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(MultiError::new(errors))
    }
}

/// Infallible variant of [`try_fill_chunks`].
pub fn fill_chunks<T, F>(out: &mut [T], workers: Workers, fill: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    let size = chunk_size(out.len(), workers);
    out.par_chunks_mut(size)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| fill(chunk_idx * size, chunk));
}

/// Maps every chunk of `data` to a partial result, in chunk order.
pub fn map_chunks<T, R, F>(data: &[T], workers: Workers, map: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync + Send,
{
    let size = chunk_size(data.len(), workers);
    data.par_chunks(size).map(map).collect()
}
