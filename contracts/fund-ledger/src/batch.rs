//! Bounded windows over the asset catalog.
//!
//! Pull and claim batches never walk the whole catalog: mutating batches take
//! a strict window, read-only pages take a truncating one. The one full walk
//! is the debt baseline written when a record is minted (see `ledger`).

use shared::constants::MAX_BATCH_SIZE;
use shared::errors::Error;

/// Half-open index range `[start, end)` into the catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    pub start: u32,
    pub end: u32,
}

impl Window {
    /// Window for a state-changing batch. Rejects empty or oversized requests
    /// and starts past the end of the catalog; a window running off the end is
    /// clipped.
    pub fn checked(start: u32, count: u32, len: u32) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }
        if count > MAX_BATCH_SIZE {
            return Err(Error::BatchTooLarge);
        }
        if start >= len {
            return Err(Error::InvalidRange);
        }
        Ok(Self {
            start,
            end: start.saturating_add(count).min(len),
        })
    }

    /// Window for a view. Never fails; yields an empty range when nothing is
    /// in reach.
    pub fn clipped(start: u32, count: u32, len: u32) -> Self {
        let count = count.min(MAX_BATCH_SIZE);
        let start = start.min(len);
        Self {
            start,
            end: start.saturating_add(count).min(len),
        }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn indices(&self) -> core::ops::Range<u32> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_window_clips_at_catalog_end() {
        let w = Window::checked(3, 10, 5).unwrap();
        assert_eq!((w.start, w.end), (3, 5));
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_checked_window_rejects_bad_requests() {
        assert_eq!(Window::checked(0, 0, 5), Err(Error::InvalidCount));
        assert_eq!(
            Window::checked(0, MAX_BATCH_SIZE + 1, 100),
            Err(Error::BatchTooLarge)
        );
        assert_eq!(Window::checked(5, 1, 5), Err(Error::InvalidRange));
        assert_eq!(Window::checked(0, 1, 0), Err(Error::InvalidRange));
    }

    #[test]
    fn test_clipped_window_never_fails() {
        assert!(Window::clipped(10, 5, 3).is_empty());
        assert_eq!(Window::clipped(1, 1_000, 100).len(), MAX_BATCH_SIZE);
        assert_eq!(Window::clipped(u32::MAX, u32::MAX, 4).len(), 0);
        let w = Window::clipped(2, 5, 4);
        assert_eq!(w.indices(), 2..4);
    }
}
