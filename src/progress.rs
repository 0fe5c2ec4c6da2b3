// src/progress.rs

//! Defines a trait for reporting combine progress.
//!
//! Progress output is cosmetic: the combiner only calls the trait, and
//! correctness never depends on what a reporter does.
use crate::constants::PROGRESS_BAR_WIDTH;
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::sync::{Mutex, PoisonError};

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// One reporter serves one combine run at a time.
///
/// # Examples
///
/// ```
/// use srccombine::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// // A mock reporter that remembers the last update.
/// struct MockProgress {
///     last: Mutex<Option<(usize, usize)>>,
/// }
/// impl ProgressReporter for MockProgress {
///     fn reset(&self) {
///         *self.last.lock().unwrap() = None;
///     }
///     fn update(&self, current: usize, total: usize) {
///         *self.last.lock().unwrap() = Some((current, total));
///     }
///     fn finish(&self) {}
/// }
///
/// let reporter = MockProgress { last: Mutex::new(None) };
/// reporter.update(3, 10);
/// assert_eq!(*reporter.last.lock().unwrap(), Some((3, 10)));
/// reporter.reset();
/// assert_eq!(*reporter.last.lock().unwrap(), None);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Clears any state left by a previous run.
    fn reset(&self);
    /// Reports that `current` of `total` files are done.
    fn update(&self, current: usize, total: usize);
    /// Finishes the progress reporting, hiding the progress bar.
    fn finish(&self);
}

/// A `ProgressReporter` that does nothing.
///
/// This is used as a default or in non-interactive environments where a progress
/// bar is not desired.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn reset(&self) {}
    fn update(&self, _current: usize, _total: usize) {}
    fn finish(&self) {}
}

/// Number of filled cells of a `width`-cell bar at `current` of `total`.
///
/// # Examples
///
/// ```
/// use srccombine::progress::filled_cells;
///
/// assert_eq!(filled_cells(0, 10, 50), 0);
/// assert_eq!(filled_cells(5, 10, 50), 25);
/// assert_eq!(filled_cells(10, 10, 50), 50);
/// assert_eq!(filled_cells(1, 0, 50), 0);
/// ```
pub fn filled_cells(current: usize, total: usize, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    current.min(total) * width / total
}

/// Decides when a fixed-width bar actually needs a redraw.
///
/// A redraw is only due when the number of filled cells differs from the
/// previous redraw.
#[derive(Debug, Clone, Default)]
pub struct RedrawThrottle {
    last_filled: Option<usize>,
}

impl RedrawThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous redraw, so the next `advance` always redraws.
    pub fn reset(&mut self) {
        self.last_filled = None;
    }

    /// Returns the new filled-cell count if it changed since the last redraw.
    pub fn advance(&mut self, current: usize, total: usize) -> Option<usize> {
        let filled = filled_cells(current, total, PROGRESS_BAR_WIDTH);
        if self.last_filled == Some(filled) {
            return None;
        }
        self.last_filled = Some(filled);
        Some(filled)
    }
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
///
/// Draws a 50-cell bar on stderr, redrawn only when its filled-cell count changes.
#[cfg(feature = "progress")]
pub struct IndicatifProgress {
    bar: ProgressBar,
    throttle: Mutex<RedrawThrottle>,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let template = format!(
            "[{{bar:{}.cyan/blue}}] {{percent:>3}}% ({{pos}}/{{len}})",
            PROGRESS_BAR_WIDTH
        );
        let style = ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self {
            bar,
            throttle: Mutex::new(RedrawThrottle::new()),
        }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn reset(&self) {
        self.throttle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
        self.bar.reset();
    }

    fn update(&self, current: usize, total: usize) {
        let mut throttle = self.throttle.lock().unwrap_or_else(PoisonError::into_inner);
        if throttle.advance(current, total).is_some() {
            self.bar.set_length(total as u64);
            self.bar.set_position(current as u64);
        }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_redraws_only_on_change() {
        let mut throttle = RedrawThrottle::new();
        // 200 files: a cell fills every 4 files.
        assert_eq!(throttle.advance(1, 200), Some(0));
        assert_eq!(throttle.advance(2, 200), None);
        assert_eq!(throttle.advance(3, 200), None);
        assert_eq!(throttle.advance(4, 200), Some(1));
        assert_eq!(throttle.advance(5, 200), None);
        assert_eq!(throttle.advance(200, 200), Some(50));
    }

    #[test]
    fn test_throttle_reset_clears_baseline() {
        let mut throttle = RedrawThrottle::new();
        assert_eq!(throttle.advance(10, 10), Some(50));
        assert_eq!(throttle.advance(10, 10), None);
        throttle.reset();
        assert_eq!(throttle.advance(10, 10), Some(50));
    }

    #[test]
    fn test_small_totals_fill_in_big_steps() {
        let mut throttle = RedrawThrottle::new();
        assert_eq!(throttle.advance(1, 2), Some(25));
        assert_eq!(throttle.advance(2, 2), Some(50));
    }

    #[test]
    fn test_filled_cells_clamps_overflow() {
        assert_eq!(filled_cells(15, 10, 50), 50);
    }

    #[test]
    fn test_noop_progress_accepts_calls() {
        let progress = NoOpProgress;
        progress.reset();
        progress.update(1, 1);
        progress.finish();
    }
}
