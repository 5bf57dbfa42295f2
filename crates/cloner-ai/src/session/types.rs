//! In-flight turn tracking.

use std::sync::atomic::{AtomicBool, Ordering};

/// Holds a session's busy flag for the length of one turn.
///
/// The flag is cleared on drop, so a cancelled `generate` future or an early
/// `?` return still frees the session.
#[must_use]
pub(crate) struct TurnGuard<'a>(&'a AtomicBool);

impl<'a> TurnGuard<'a> {
    /// `None` when another turn already holds the flag.
    pub(crate) fn try_begin(busy: &'a AtomicBool) -> Option<Self> {
        busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(busy))
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
