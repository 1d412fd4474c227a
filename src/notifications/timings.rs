// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle timing domain type.
//!
//! This module provides a type-safe wrapper for the two delays that drive a
//! toast's life: how long it stays on screen and how long each opacity fade
//! takes. Values are clamped at construction so persisted configs cannot
//! request nonsensical timings.

use crate::config::{
    DEFAULT_TOAST_FADE_MS, DEFAULT_TOAST_VISIBLE_MS, MAX_TOAST_FADE_MS, MAX_TOAST_VISIBLE_MS,
    MIN_TOAST_FADE_MS, MIN_TOAST_VISIBLE_MS, ToastConfig,
};
use std::time::Duration;

/// Validated lifecycle delays for a toast.
///
/// # Example
///
/// ```
/// use iced_toast::notifications::Timings;
///
/// let timings = Timings::default();
/// assert_eq!(timings.visible(), std::time::Duration::from_millis(1200));
/// assert_eq!(timings.fade(), std::time::Duration::from_millis(160));
///
/// // Values outside range are clamped
/// let clamped = Timings::new(0, 60_000);
/// assert!(clamped.visible() > std::time::Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    visible: Duration,
    fade: Duration,
}

impl Timings {
    /// Creates new timings from millisecond values, clamping both to their
    /// valid ranges.
    #[must_use]
    pub fn new(visible_ms: u64, fade_ms: u64) -> Self {
        Self {
            visible: Duration::from_millis(
                visible_ms.clamp(MIN_TOAST_VISIBLE_MS, MAX_TOAST_VISIBLE_MS),
            ),
            fade: Duration::from_millis(fade_ms.clamp(MIN_TOAST_FADE_MS, MAX_TOAST_FADE_MS)),
        }
    }

    /// Resolves timings from the `[toast]` config section, falling back to
    /// the defaults for absent fields.
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new(
            config.visible_ms.unwrap_or(DEFAULT_TOAST_VISIBLE_MS),
            config.fade_ms.unwrap_or(DEFAULT_TOAST_FADE_MS),
        )
    }

    /// Time between showing a toast and the start of its fade-out.
    #[must_use]
    pub fn visible(self) -> Duration {
        self.visible
    }

    /// Duration of each opacity fade; the toast is removed this long after
    /// the fade-out starts.
    #[must_use]
    pub fn fade(self) -> Duration {
        self.fade
    }

    /// Total lifetime of a toast, from show to removal.
    #[must_use]
    pub fn total(self) -> Duration {
        self.visible + self.fade
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_VISIBLE_MS, DEFAULT_TOAST_FADE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        let timings = Timings::new(0, u64::MAX);
        assert_eq!(
            timings.visible(),
            Duration::from_millis(MIN_TOAST_VISIBLE_MS)
        );
        assert_eq!(timings.fade(), Duration::from_millis(MAX_TOAST_FADE_MS));
    }

    #[test]
    fn new_accepts_valid_values() {
        let timings = Timings::new(1500, 200);
        assert_eq!(timings.visible(), Duration::from_millis(1500));
        assert_eq!(timings.fade(), Duration::from_millis(200));
    }

    #[test]
    fn default_matches_contract_delays() {
        let timings = Timings::default();
        assert_eq!(timings.visible(), Duration::from_millis(1200));
        assert_eq!(timings.fade(), Duration::from_millis(160));
        assert_eq!(timings.total(), Duration::from_millis(1360));
    }

    #[test]
    fn from_config_uses_defaults_for_absent_fields() {
        let timings = Timings::from_config(&ToastConfig::default());
        assert_eq!(timings, Timings::default());
    }

    #[test]
    fn from_config_applies_overrides() {
        let config = ToastConfig {
            visible_ms: Some(2000),
            fade_ms: Some(240),
        };
        let timings = Timings::from_config(&config);
        assert_eq!(timings.visible(), Duration::from_millis(2000));
        assert_eq!(timings.fade(), Duration::from_millis(240));
    }
}
