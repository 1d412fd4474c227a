// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::time::Instant;

/// Runtime flags handed over by the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional message shown as a toast right after startup.
    pub initial_message: Option<String>,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The demo input field changed.
    InputChanged(String),
    /// Show the current input as a toast.
    ShowToast,
    /// Periodic tick that repaints the overlay while toasts are live.
    Tick(Instant),
}
