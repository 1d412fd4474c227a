// SPDX-License-Identifier: MPL-2.0
//! Presentation surface port definition.
//!
//! This module defines the [`PresentationSurface`] trait, the seam between
//! the toast lifecycle logic and whatever actually renders nodes on screen.
//! The presenter only ever talks to this trait, so hosts (and tests) decide
//! how nodes are drawn and when repaints happen.
//!
//! A surface is expected to provide:
//! - node creation with plain text content (styled, initially transparent),
//! - attachment as the last child of the surface,
//! - opacity transitions toward a target value,
//! - detachment,
//! - a next-repaint signal used to defer the fade-in until the transparent
//!   state has actually been presented once.
//!
//! Fixed-delay scheduling is deliberately *not* part of the port: the async
//! runtime already provides it, and its paused test clock stands in for a
//! scheduler double.

mod scene;
mod transition;

pub use scene::{NodeSnapshot, SceneSurface};
pub use transition::Transition;

use std::future::Future;

/// Unique identifier for a node created on a presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new unique node ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Host capability for presenting toast nodes.
///
/// Mutations addressed at a node that no longer exists are silent no-ops;
/// the lifecycle is fire-and-forget and has no error path.
pub trait PresentationSurface: Send + Sync + 'static {
    /// Allocates a styled node with the given text content.
    ///
    /// The node starts fully transparent and is not yet attached.
    fn create_node(&self, text: &str) -> NodeId;

    /// Attaches a node as the last child of the surface.
    fn attach(&self, id: NodeId);

    /// Starts an opacity transition toward `target` (0.0 to 1.0).
    fn set_opacity(&self, id: NodeId, target: f32);

    /// Detaches and discards a node.
    fn remove(&self, id: NodeId);

    /// Resolves just before the surface's next repaint.
    ///
    /// A caller that awaits this after attaching a transparent node is
    /// guaranteed the transparent state was presentable once, so a
    /// subsequent [`set_opacity`](Self::set_opacity) call animates instead
    /// of snapping straight to the target.
    fn next_repaint(&self) -> impl Future<Output = ()> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_ne!(a, b);
    }
}
