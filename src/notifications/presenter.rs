// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle owner.
//!
//! The `Presenter` turns a `show` call into the full toast sequence against
//! its surface: attach transparent, fade in after the next repaint, fade out
//! at a fixed deadline, remove once the fade has finished. Each call owns an
//! independent node and an independent timer task; nothing is queued, capped,
//! or cancelled.

use super::timings::Timings;
use crate::surface::PresentationSurface;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::debug;

/// Displays transient toast notifications on a presentation surface.
#[derive(Debug)]
pub struct Presenter<S: PresentationSurface> {
    surface: Arc<S>,
    timings: Timings,
    handle: Handle,
}

impl<S: PresentationSurface> Presenter<S> {
    /// Creates a presenter driving `surface`, spawning its timer tasks on
    /// `handle`.
    pub fn new(surface: Arc<S>, timings: Timings, handle: Handle) -> Self {
        Self {
            surface,
            timings,
            handle,
        }
    }

    /// The timings this presenter runs toasts with.
    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Shows a transient toast with the given plain-text message.
    ///
    /// The node is created and attached before this returns; the fade-in,
    /// fade-out, and removal run later on the presenter's runtime. The
    /// fade-out deadline is measured from this call, not from the fade-in.
    ///
    /// The message is rendered as text content only; it is never interpreted
    /// as markup. The empty string is shown like any other message.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        let id = self.surface.create_node(&message);
        self.surface.attach(id);
        debug!(?id, len = message.len(), "toast attached");

        let surface = Arc::clone(&self.surface);
        let visible = self.timings.visible();
        let fade = self.timings.fade();
        let fade_out_at = tokio::time::Instant::now() + visible;

        self.handle.spawn(async move {
            // Let the transparent state reach the screen once, so the
            // opacity change below transitions instead of snapping.
            surface.next_repaint().await;
            surface.set_opacity(id, 1.0);

            tokio::time::sleep_until(fade_out_at).await;
            surface.set_opacity(id, 0.0);

            tokio::time::sleep(fade).await;
            surface.remove(id);
            debug!(?id, "toast removed");
        });
    }
}
