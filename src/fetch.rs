//! Once-per-run fetch latch.

use crate::error::Result;

/// Remembers whether `origin` has been fetched during this run.
///
/// Owned by a single downloader. Not synchronized: `cached_fetch` takes
/// `&mut self`, so one instance can't be fetched from two threads at once.
#[derive(Debug, Default, Clone)]
pub struct FetchCache {
    fetched: bool,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Runs `fetch` unless an earlier call already succeeded.
    ///
    /// A failed fetch leaves the latch unset so the next call retries.
    pub fn cached_fetch<F>(&mut self, fetch: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        if self.fetched {
            return Ok(());
        }

        fetch()?;
        self.fetched = true;
        Ok(())
    }
}
