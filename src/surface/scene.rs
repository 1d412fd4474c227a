// SPDX-License-Identifier: MPL-2.0
//! Shared in-memory presentation surface.
//!
//! [`SceneSurface`] is the concrete surface behind the Iced host: an ordered
//! list of live nodes guarded by a mutex, plus a repaint signal the host
//! publishes once per rendered frame. Presenter tasks mutate it from the
//! timer runtime; the view thread reads it through [`SceneSurface::snapshot`].

use super::transition::Transition;
use super::{NodeId, PresentationSurface};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::sync::Notify;

/// A live node in the scene.
#[derive(Debug)]
struct Node {
    id: NodeId,
    message: String,
    attached: bool,
    opacity: Transition,
}

/// Read-only view of one node, sampled at a single instant.
#[derive(Debug, Clone)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub message: String,
    /// Opacity currently presented, mid-transition values included.
    pub opacity: f32,
    /// Opacity the node's transition is heading toward.
    pub target: f32,
}

/// Thread-safe scene the host renders from.
#[derive(Debug)]
pub struct SceneSurface {
    nodes: Mutex<Vec<Node>>,
    repaint: Notify,
    fade: Duration,
}

impl SceneSurface {
    /// Creates an empty scene whose opacity transitions run over `fade`.
    pub fn new(fade: Duration) -> Self {
        Self {
            nodes: Mutex::new(Vec::new()),
            repaint: Notify::new(),
            fade,
        }
    }

    /// Publishes the repaint signal, waking every pending
    /// [`next_repaint`](PresentationSurface::next_repaint) future.
    ///
    /// The host calls this once per rendered frame while toasts are live.
    pub fn notify_repaint(&self) {
        self.repaint.notify_waiters();
    }

    /// Whether any node exists, attached or not.
    pub fn has_nodes(&self) -> bool {
        self.nodes.lock().map(|nodes| !nodes.is_empty()).unwrap_or(false)
    }

    /// Number of attached nodes.
    pub fn attached_count(&self) -> usize {
        self.nodes
            .lock()
            .map(|nodes| nodes.iter().filter(|n| n.attached).count())
            .unwrap_or(0)
    }

    /// Target opacity of a node, if it still exists.
    pub fn target_opacity(&self, id: NodeId) -> Option<f32> {
        let nodes = self.nodes.lock().ok()?;
        nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.opacity.target())
    }

    /// Snapshots every attached node at the current instant, in attach order.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.snapshot_at(Instant::now())
    }

    /// Snapshots every attached node, sampling opacities at `now`.
    pub fn snapshot_at(&self, now: Instant) -> Vec<NodeSnapshot> {
        let Ok(nodes) = self.nodes.lock() else {
            return Vec::new();
        };
        nodes
            .iter()
            .filter(|n| n.attached)
            .map(|n| NodeSnapshot {
                id: n.id,
                message: n.message.clone(),
                opacity: n.opacity.value_at(now),
                target: n.opacity.target(),
            })
            .collect()
    }
}

impl PresentationSurface for SceneSurface {
    fn create_node(&self, text: &str) -> NodeId {
        let id = NodeId::new();
        if let Ok(mut nodes) = self.nodes.lock() {
            nodes.push(Node {
                id,
                message: text.to_owned(),
                attached: false,
                opacity: Transition::fixed(0.0),
            });
        }
        id
    }

    fn attach(&self, id: NodeId) {
        if let Ok(mut nodes) = self.nodes.lock() {
            if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
                node.attached = true;
            }
        }
    }

    fn set_opacity(&self, id: NodeId, target: f32) {
        let now = Instant::now();
        if let Ok(mut nodes) = self.nodes.lock() {
            if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
                node.opacity = node.opacity.retarget(target, now, self.fade);
            }
        }
    }

    fn remove(&self, id: NodeId) {
        if let Ok(mut nodes) = self.nodes.lock() {
            nodes.retain(|n| n.id != id);
        }
    }

    fn next_repaint(&self) -> impl std::future::Future<Output = ()> + Send {
        self.repaint.notified()
    }
}
