//! Degree of fan-out for parallel operations.

use serde::{Deserialize, Serialize};
use std::{
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::frame::FrameError;

// 0 means "not set, use the rayon pool size".
static DEFAULT_WORKERS: AtomicUsize = AtomicUsize::new(0);

/// Number of chunks every parallel operation splits its rows into.
///
/// A `Workers` value travels with the [`Config`](crate::Config) used to build
/// a frame and with every view derived from it. Chunks run on the current
/// rayon pool; the count only fixes how the rows are partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Workers(NonZeroUsize);

impl Workers {
    pub fn new(n: usize) -> Result<Self, FrameError> {
        NonZeroUsize::new(n)
            .map(Workers)
            .ok_or(FrameError::InvalidWorkerCount(n))
    }

    pub const fn single() -> Self {
        Workers(NonZeroUsize::MIN)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for Workers {
    fn default() -> Self {
        let n = match DEFAULT_WORKERS.load(Ordering::Relaxed) {
            0 => rayon::current_num_threads(),
            n => n,
        };
        Workers(NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for Workers {
    type Error = FrameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Workers::new(value)
    }
}

impl From<Workers> for usize {
    fn from(value: Workers) -> Self {
        value.get()
    }
}

/// Sets the process-wide count returned by `Workers::default()`.
///
/// Only affects configurations created afterwards; frames keep the count they
/// were built with.
pub fn set_default_workers(n: usize) -> Result<(), FrameError> {
    let workers = Workers::new(n)?;
    DEFAULT_WORKERS.store(workers.get(), Ordering::Relaxed);
    Ok(())
}
