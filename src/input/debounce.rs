//! Non-blocking edge debounce
//!
//! An [`EdgeLatch`] packs the accepted edge into one `AtomicU32`:
//!
//! ```text
//!  31        30       29..0
//! PENDING   LEVEL   timestamp (ms, modulo 2^30)
//! ```
//!
//! The first edge starts a debounce window and its timestamp is kept. Edges
//! inside the window are bounce: they only refresh the sampled level, so the
//! level reported is the one seen closest to the end of the window. The main
//! loop settles the latch once the window has elapsed, which frees it for the
//! next edge. Continuous edges therefore still yield one event per window.

use core::sync::atomic::{AtomicU32, Ordering};

const PENDING: u32 = 1 << 31;
const LEVEL: u32 = 1 << 30;
const STAMP_MASK: u32 = LEVEL - 1;

/// Accepted edge plus a sampled line level
pub struct EdgeLatch {
    word: AtomicU32,
    window_ms: u32,
}

impl EdgeLatch {
    /// Create an empty latch with a `window_ms` debounce window
    #[must_use]
    pub const fn new(window_ms: u32) -> Self {
        Self {
            word: AtomicU32::new(0),
            window_ms: if window_ms > STAMP_MASK { STAMP_MASK } else { window_ms },
        }
    }

    /// Record an edge at `now_ms` with an auxiliary `level` sample
    ///
    /// Safe to call from interrupt context. Opens a window when none is
    /// pending; otherwise only the level sample is updated.
    pub fn record(&self, now_ms: u32, level: bool) {
        let level = if level { LEVEL } else { 0 };
        // The closure always returns Some, so the update cannot fail
        let _ = self
            .word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |word| {
                Some(if word & PENDING == 0 {
                    PENDING | level | (now_ms & STAMP_MASK)
                } else {
                    (word & !LEVEL) | level
                })
            });
    }

    /// Consume the edge once its window has elapsed
    ///
    /// Returns the most recent level sample.
    pub fn settle(&self, now_ms: u32) -> Option<bool> {
        self.word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |word| {
                if word & PENDING == 0 {
                    return None;
                }
                let elapsed = now_ms.wrapping_sub(word & STAMP_MASK) & STAMP_MASK;
                (elapsed >= self.window_ms).then_some(0)
            })
            .ok()
            .map(|word| word & LEVEL != 0)
    }

    /// Check whether an edge is waiting to settle
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.word.load(Ordering::Acquire) & PENDING != 0
    }

    /// Debounce window in milliseconds
    #[must_use]
    pub const fn window_ms(&self) -> u32 {
        self.window_ms
    }
}
