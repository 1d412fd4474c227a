// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following the
//! toast/snackbar UX pattern: a short message appears near the bottom of the
//! window, fades in, and disappears on its own without blocking interaction.
//!
//! # Components
//!
//! - [`presenter`] - `Presenter` owning the timed show/fade/remove sequence
//! - [`timings`] - Validated lifecycle delays (visible and fade durations)
//!
//! # Usage
//!
//! ```no_run
//! use iced_toast::notifications::{Presenter, Timings};
//! use iced_toast::surface::SceneSurface;
//! use std::sync::Arc;
//!
//! let timings = Timings::default();
//! let surface = Arc::new(SceneSurface::new(timings.fade()));
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//!
//! let presenter = Presenter::new(Arc::clone(&surface), timings, runtime.handle().clone());
//! presenter.show("Saved");
//! ```
//!
//! # Design Considerations
//!
//! - Every `show` call is independent: no queue, no cap on simultaneous
//!   toasts, no cancellation of earlier ones.
//! - Simultaneous toasts stack in attach order; the host's default layout
//!   decides what that looks like.
//! - Failure handling is deliberately absent: a toast whose node disappears
//!   under it simply finishes its sequence as a series of no-ops.

mod presenter;
mod timings;

pub use presenter::Presenter;
pub use timings::Timings;
