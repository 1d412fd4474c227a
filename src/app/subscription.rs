// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for toast repaints.
///
/// Active only while the scene holds nodes: each tick publishes the repaint
/// signal (resolving pending fade-ins) and redraws the fading overlay. With
/// no toasts live there is nothing to animate, so no timer runs.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(config::REPAINT_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
