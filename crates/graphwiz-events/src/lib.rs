use crossbeam_channel::{Receiver, Sender, unbounded};
use graphwiz_core::{Algorithm, EdgeId, NodeId, VisualState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // Construction
    NodeAdded {
        id: NodeId,
    },
    EdgeAdded {
        id: EdgeId,
        a: NodeId,
        b: NodeId,
    },
    SelectionChanged {
        selected: Option<NodeId>,
    },
    Undone {
        description: String,
    },
    GraphReset,
    GraphCleared,

    // Traversal
    TraversalStarted {
        algorithm: Algorithm,
    },
    TraversalStep {
        node: NodeId,
        state: VisualState,
    },
    TraversalFinished {
        algorithm: Algorithm,
        path: String,
    },
    TraversalCancelled {
        algorithm: Algorithm,
        path: String,
    },

    // Status
    /// Visit order so far, dash-joined ("0-1-3").
    PathUpdated {
        path: String,
    },
    StatusUpdate {
        message: String,
    },
    /// A command arrived while it could not run (e.g. Undo mid-traversal).
    CommandRejected {
        command: String,
        reason: String,
    },
}

impl Event {
    /// Whether the canvas needs repainting after this event.
    pub fn affects_canvas(&self) -> bool {
        !matches!(
            self,
            Event::StatusUpdate { .. } | Event::CommandRejected { .. } | Event::PathUpdated { .. }
        )
    }
}

#[derive(Clone)]
pub struct EventBus {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn publish(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    /// Dispatch all pending events to a listener.
    /// Meant to be called from the UI loop.
    pub fn dispatch_to<L: EventListener>(&self, listener: &mut L) -> usize {
        let mut count = 0;
        while let Ok(event) = self.rx.try_recv() {
            listener.handle_event(&event);
            count += 1;
        }
        count
    }

    /// Drain pending events without a listener.
    pub fn drain(&self) -> Vec<Event> {
        self.rx.try_iter().collect()
    }
}

/// Trait for components that respond to events.
pub trait EventListener {
    fn handle_event(&mut self, event: &Event);
}
