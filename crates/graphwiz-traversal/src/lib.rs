//! Breadth-first and depth-first walks over a [`GraphModel`], planned up
//! front and replayed on a background thread at animation pace.
//!
//! [`GraphModel`]: graphwiz_graph::GraphModel

pub mod cancellation;
pub mod engine;
pub mod pacing;
pub mod plan;
pub mod runner;

pub use cancellation::CancellationToken;
pub use engine::{TraversalEngine, TraversalError};
pub use pacing::Pacing;
pub use plan::{Pause, Steps, Transition, TraversalPlan, TraversalStep};
pub use runner::{TraversalEvent, TraversalHandle};
