// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Toast Lifecycle Defaults
// ==========================================================================

/// Default time a toast stays on screen before the fade-out begins,
/// measured from the moment it is shown (in milliseconds).
pub const DEFAULT_TOAST_VISIBLE_MS: u64 = 1200;

/// Minimum allowed visible duration (in milliseconds).
pub const MIN_TOAST_VISIBLE_MS: u64 = 200;

/// Maximum allowed visible duration (in milliseconds).
pub const MAX_TOAST_VISIBLE_MS: u64 = 30_000;

/// Default opacity transition duration, used for both the fade-in and the
/// fade-out. The toast is removed this long after the fade-out starts.
pub const DEFAULT_TOAST_FADE_MS: u64 = 160;

/// Minimum allowed fade duration (in milliseconds).
pub const MIN_TOAST_FADE_MS: u64 = 16;

/// Maximum allowed fade duration (in milliseconds).
pub const MAX_TOAST_FADE_MS: u64 = 2_000;

// ==========================================================================
// Repaint Defaults
// ==========================================================================

/// Interval between overlay repaints while toasts are live (in
/// milliseconds). Roughly one frame at 60 Hz.
pub const REPAINT_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Visible duration validation
    assert!(MIN_TOAST_VISIBLE_MS > 0);
    assert!(MAX_TOAST_VISIBLE_MS >= MIN_TOAST_VISIBLE_MS);
    assert!(DEFAULT_TOAST_VISIBLE_MS >= MIN_TOAST_VISIBLE_MS);
    assert!(DEFAULT_TOAST_VISIBLE_MS <= MAX_TOAST_VISIBLE_MS);

    // Fade duration validation
    assert!(MIN_TOAST_FADE_MS > 0);
    assert!(MAX_TOAST_FADE_MS >= MIN_TOAST_FADE_MS);
    assert!(DEFAULT_TOAST_FADE_MS >= MIN_TOAST_FADE_MS);
    assert!(DEFAULT_TOAST_FADE_MS <= MAX_TOAST_FADE_MS);

    // The repaint interval must be able to sample the shortest fade.
    assert!(REPAINT_INTERVAL_MS > 0);
    assert!(REPAINT_INTERVAL_MS <= MIN_TOAST_FADE_MS);
};
