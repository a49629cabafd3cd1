mod command;
mod status;

pub use command::Command;
pub use status::StatusLine;

use graphwiz_core::Algorithm;
use graphwiz_events::{Event, EventBus};
use graphwiz_graph::{
    GraphModel, HitTester, Interaction, InteractionController, NodePalette, PointerEvent, Scene,
    hit_tester::DEFAULT_NODE_RADIUS,
};
use graphwiz_traversal::{Pacing, TraversalEngine, TraversalError, TraversalEvent};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("A traversal is running; stop it first")]
    TraversalActive,
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub node_radius: f32,
    /// Extra reach around each node for hit testing.
    pub hit_tolerance: f32,
    pub pacing: Pacing,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            node_radius: DEFAULT_NODE_RADIUS,
            hit_tolerance: 0.0,
            pacing: Pacing::default(),
        }
    }
}

/// GUI-agnostic owner of one editing session.
///
/// All model writes go through here on the owning thread: clicks, commands
/// and the traversal steps drained by [`Session::pump`]. While a traversal
/// runs every mutating input is refused, except [`Command::Stop`].
/// Observers subscribe to [`Session::events`].
pub struct Session {
    model: GraphModel,
    controller: InteractionController,
    engine: TraversalEngine,
    events: EventBus,
    status: StatusLine,
    node_radius: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let hit_tester = HitTester::with_tolerance(config.node_radius, config.hit_tolerance);
        Self {
            model: GraphModel::new(),
            controller: InteractionController::new(hit_tester),
            engine: TraversalEngine::new(config.pacing),
            events: EventBus::new(),
            status: StatusLine::default(),
            node_radius: config.node_radius,
        }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    pub fn is_traversing(&self) -> bool {
        self.engine.is_running()
    }

    pub fn running_algorithm(&self) -> Option<Algorithm> {
        self.engine.running_algorithm()
    }

    /// Takes effect from the next run.
    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.engine.set_pacing(pacing);
    }

    pub fn scene(&self, palette: NodePalette) -> Scene {
        Scene::capture(&self.model, palette, self.node_radius)
    }

    /// Feeds one canvas click to the interaction controller.
    pub fn pointer(&mut self, event: PointerEvent) -> Result<Interaction, SessionError> {
        self.ensure_idle("Click")?;

        let interaction = self.controller.handle(&mut self.model, event);
        match interaction {
            Interaction::NodeAdded(id) => {
                self.events.publish(Event::NodeAdded { id });
            }
            Interaction::NodeSelected(id) => {
                self.events.publish(Event::SelectionChanged { selected: Some(id) });
            }
            Interaction::EdgeAdded { id, a, b } => {
                self.events.publish(Event::SelectionChanged { selected: None });
                self.events.publish(Event::EdgeAdded { id, a, b });
            }
            Interaction::EdgeRejected { .. } | Interaction::Deselected(_) => {
                self.events.publish(Event::SelectionChanged { selected: None });
            }
            Interaction::Ignored => {}
        }
        if let Some(message) = interaction.describe() {
            self.set_message(message);
        }
        Ok(interaction)
    }

    pub fn execute(&mut self, command: Command) -> Result<(), SessionError> {
        if !command.allowed_while_traversing() {
            self.ensure_idle(command.label())?;
        }

        match command {
            Command::RunBfs => self.run(Algorithm::BreadthFirst).map(|_| ()),
            Command::RunDfs => self.run(Algorithm::DepthFirst).map(|_| ()),
            Command::Undo => {
                self.undo();
                Ok(())
            }
            Command::Reset => {
                self.model.reset_visual_state();
                self.status.clear_path();
                self.events.publish(Event::GraphReset);
                self.events.publish(Event::PathUpdated {
                    path: String::new(),
                });
                self.set_message("Graph reset");
                Ok(())
            }
            Command::Clear => {
                self.model.clear();
                self.status.clear_path();
                self.events.publish(Event::GraphCleared);
                self.events.publish(Event::PathUpdated {
                    path: String::new(),
                });
                self.set_message("Graph cleared");
                Ok(())
            }
            Command::Stop => {
                self.stop();
                Ok(())
            }
        }
    }

    /// Starts an animated traversal from the oldest node. Visual state and
    /// path are reset first. Returns `false` when the graph is empty, which
    /// is not an error.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<bool, SessionError> {
        self.ensure_idle(algorithm.short_name())?;

        if self.model.is_empty() {
            tracing::debug!("{} ignored: graph is empty", algorithm);
            return Ok(false);
        }

        self.model.reset_visual_state();
        self.status.clear_path();
        self.engine.start(&self.model, algorithm)?;

        self.events.publish(Event::TraversalStarted { algorithm });
        self.events.publish(Event::PathUpdated {
            path: String::new(),
        });
        self.set_message(format!("Running {}...", algorithm.short_name()));
        Ok(true)
    }

    /// Applies whatever the running traversal has produced so far. Call
    /// once per frame. Returns the number of events applied.
    pub fn pump(&mut self) -> usize {
        let events = self.engine.drain();
        self.apply_all(events)
    }

    /// Like [`Session::pump`], but waits up to `timeout` for at least one
    /// event first.
    pub fn pump_timeout(&mut self, timeout: Duration) -> usize {
        let Some(first) = self.engine.next_timeout(timeout) else {
            return 0;
        };
        self.apply(first);
        1 + self.pump()
    }

    /// Blocks until the running traversal ends, applying every step.
    pub fn wait(&mut self) -> usize {
        let events = self.engine.wait();
        self.apply_all(events)
    }

    /// Cancels the running traversal, if any, and applies what it sent
    /// before stopping. Colours reached so far stay on the canvas.
    pub fn stop(&mut self) -> bool {
        if !self.engine.is_running() {
            return false;
        }
        let events = self.engine.cancel();
        self.apply_all(events);
        true
    }

    fn undo(&mut self) {
        match self.model.undo() {
            Some(action) => {
                self.events.publish(Event::Undone {
                    description: action.description(),
                });
                self.set_message("Undo");
            }
            None => tracing::debug!("Undo ignored: history is empty"),
        }
    }

    fn apply_all(&mut self, events: Vec<TraversalEvent>) -> usize {
        let count = events.len();
        for event in events {
            self.apply(event);
        }
        count
    }

    fn apply(&mut self, event: TraversalEvent) {
        match event {
            TraversalEvent::Step(step) => {
                self.model.set_visual_state(step.node, step.state);
                self.events.publish(Event::TraversalStep {
                    node: step.node,
                    state: step.state,
                });
                if step.discovered {
                    self.status.set_path(step.path.clone());
                    self.events.publish(Event::PathUpdated { path: step.path });
                }
            }
            TraversalEvent::Finished { algorithm, path } => {
                self.status.set_path(path.clone());
                self.set_message(format!("{} complete", algorithm.short_name()));
                self.events
                    .publish(Event::TraversalFinished { algorithm, path });
            }
            TraversalEvent::Cancelled { algorithm, path } => {
                self.status.set_path(path.clone());
                self.set_message("Traversal stopped");
                self.events
                    .publish(Event::TraversalCancelled { algorithm, path });
            }
        }
    }

    fn ensure_idle(&self, what: &str) -> Result<(), SessionError> {
        if !self.engine.is_running() {
            return Ok(());
        }
        tracing::debug!("{} rejected: traversal in progress", what);
        self.events.publish(Event::CommandRejected {
            command: what.to_string(),
            reason: "traversal in progress".to_string(),
        });
        Err(SessionError::TraversalActive)
    }

    fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.events.publish(Event::StatusUpdate {
            message: message.clone(),
        });
        self.status.set_message(message);
    }
}
