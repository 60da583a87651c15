//! Timing for the background tasks owned by the main view.
//!
//! Section tickers use each section's configured interval. Everything here
//! is UI-side polling of core state.

use std::time::Duration;

/// How often finished `run` workers are collected into the status area.
pub const RUN_RESULTS_POLL_INTERVAL: Duration = Duration::from_millis(100);
