// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` displays transient toast notifications with the Iced GUI framework.
//!
//! The core is a [`notifications::Presenter`] that runs each toast through a
//! fixed timed lifecycle (fade in, hold, fade out, remove) against an abstract
//! [`surface::PresentationSurface`], plus a small Iced host application that
//! renders the surface and demonstrates the overlay end to end.

pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod surface;
pub mod ui;
