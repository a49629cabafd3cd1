use crate::pacing::Pacing;
use crate::plan::TraversalPlan;
use crate::runner::{TraversalEvent, TraversalHandle};
use crossbeam_channel::{RecvTimeoutError, TryRecvError};
use graphwiz_core::Algorithm;
use graphwiz_graph::GraphModel;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("Graph has no nodes to traverse")]
    EmptyGraph,
    #[error("{0} traversal already running")]
    AlreadyRunning(Algorithm),
    #[error("Failed to spawn traversal thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Owns at most one running traversal.
///
/// Planning happens on the caller's thread against the live model; only the
/// paced replay runs in the background. Callers apply the returned events.
#[derive(Default)]
pub struct TraversalEngine {
    pacing: Pacing,
    active: Option<TraversalHandle>,
}

impl TraversalEngine {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            active: None,
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Applies to the next run only.
    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.pacing = pacing;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn running_algorithm(&self) -> Option<Algorithm> {
        self.active.as_ref().map(TraversalHandle::algorithm)
    }

    /// Plans a traversal from the first node of `model` and starts replaying it.
    pub fn start(
        &mut self,
        model: &GraphModel,
        algorithm: Algorithm,
    ) -> Result<TraversalPlan, TraversalError> {
        if let Some(active) = &self.active {
            return Err(TraversalError::AlreadyRunning(active.algorithm()));
        }
        let plan = TraversalPlan::build(model, algorithm).ok_or(TraversalError::EmptyGraph)?;
        let handle = TraversalHandle::spawn(plan.clone(), self.pacing)?;
        tracing::debug!(
            "Spawned {} runner over {} nodes, {} edges",
            algorithm,
            model.node_count(),
            model.edge_count()
        );
        self.active = Some(handle);
        Ok(plan)
    }

    /// Everything the runner has sent so far. Releases the runner once its
    /// terminal event has been handed out, or once its thread is gone.
    pub fn drain(&mut self) -> Vec<TraversalEvent> {
        let Some(handle) = &self.active else {
            return Vec::new();
        };
        let mut events = Vec::new();
        loop {
            match handle.try_next() {
                Ok(event) => {
                    let terminal = event.is_terminal();
                    events.push(event);
                    if terminal {
                        self.active = None;
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.release_lost_runner();
                    break;
                }
            }
        }
        events
    }

    /// Waits up to `timeout` for the next event.
    pub fn next_timeout(&mut self, timeout: Duration) -> Option<TraversalEvent> {
        match self.active.as_ref()?.next_timeout(timeout) {
            Ok(event) => {
                if event.is_terminal() {
                    self.active = None;
                }
                Some(event)
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.release_lost_runner();
                None
            }
        }
    }

    /// Blocks until the active run ends, returning every remaining event.
    pub fn wait(&mut self) -> Vec<TraversalEvent> {
        let mut events = Vec::new();
        while let Some(handle) = &self.active {
            match handle.next_blocking() {
                Some(event) => {
                    let terminal = event.is_terminal();
                    events.push(event);
                    if terminal {
                        self.active = None;
                    }
                }
                None => self.active = None,
            }
        }
        events
    }

    /// The runner hung up without a terminal event; its thread died.
    fn release_lost_runner(&mut self) {
        if let Some(handle) = self.active.take() {
            tracing::error!(
                "{} runner stopped without finishing; releasing it",
                handle.algorithm()
            );
        }
    }

    /// Stops the active run and waits for its thread. Returns the events it
    /// sent before stopping; the last one is terminal.
    pub fn cancel(&mut self) -> Vec<TraversalEvent> {
        match self.active.take() {
            Some(handle) => {
                tracing::info!("Cancelling {} traversal", handle.algorithm());
                handle.cancel_and_wait()
            }
            None => Vec::new(),
        }
    }
}
