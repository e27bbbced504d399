//! Progress reporting support.
//!
//! This module provides [`ProgressCallback`] for monitoring extraction
//! progress and [`ProgressInfo`] for detailed progress snapshots.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use unreel::{ProgressCallback, ProgressInfo, SampleOptions, UnreelError, extract_frames};
//!
//! struct PrintProgress;
//!
//! impl ProgressCallback for PrintProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         if let Some(pct) = info.percentage {
//!             println!("{pct:.1}% complete");
//!         }
//!     }
//! }
//!
//! let options = SampleOptions::new().with_progress(Arc::new(PrintProgress));
//! let summary = extract_frames("input.gif", &options)?;
//! # Ok::<(), UnreelError>(())
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

/// A snapshot of extraction progress.
///
/// Delivered to [`ProgressCallback::on_progress`] once per saved frame and
/// once more when the extraction finishes.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// How many frames have been saved so far.
    pub current: u64,
    /// Total frames expected, if known ahead of time.
    pub total: Option<u64>,
    /// Completion percentage (0.0 – 100.0), if `total` is known.
    pub percentage: Option<f32>,
    /// Wall-clock time elapsed since the extraction started.
    pub elapsed: Duration,
    /// Estimated time remaining, based on current throughput.
    pub estimated_remaining: Option<Duration>,
    /// The source frame index currently being processed.
    pub current_frame: Option<u64>,
}

/// Trait for receiving progress updates during extraction.
///
/// Implementations must be [`Send`] and [`Sync`] so a single callback can be
/// shared across extraction calls. Callbacks are **infallible** — they
/// observe but cannot halt the operation.
pub trait ProgressCallback: Send + Sync {
    /// Called after each saved frame and once when extraction completes.
    fn on_progress(&self, info: &ProgressInfo);
}

/// A no-op implementation that discards all progress notifications.
///
/// This is the default when no callback is configured.
pub(crate) struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _info: &ProgressInfo) {}
}

/// Internal helper that tracks progress timing and emits callbacks.
pub(crate) struct ProgressTracker {
    callback: Arc<dyn ProgressCallback>,
    total: Option<u64>,
    current: u64,
    start_time: Instant,
}

impl ProgressTracker {
    /// Create a new tracker.
    pub(crate) fn new(callback: Arc<dyn ProgressCallback>, total: Option<u64>) -> Self {
        Self {
            callback,
            total,
            current: 0,
            start_time: Instant::now(),
        }
    }

    /// Record one saved frame and fire the callback.
    pub(crate) fn advance(&mut self, frame_index: u64) {
        self.current += 1;
        self.report(Some(frame_index));
    }

    /// Unconditionally emit a final progress report.
    pub(crate) fn finish(&mut self) {
        self.report(None);
    }

    fn report(&self, frame_index: Option<u64>) {
        let elapsed = self.start_time.elapsed();

        let percentage = self
            .total
            .filter(|&t| t > 0)
            .map(|t| (self.current as f32 / t as f32) * 100.0);

        let estimated_remaining = if self.current > 0 {
            self.total.map(|t| {
                let remaining = t.saturating_sub(self.current);
                let per_item = elapsed / self.current as u32;
                per_item * remaining as u32
            })
        } else {
            None
        };

        let info = ProgressInfo {
            current: self.current,
            total: self.total,
            percentage,
            elapsed,
            estimated_remaining,
            current_frame: frame_index,
        };

        self.callback.on_progress(&info);
    }
}
