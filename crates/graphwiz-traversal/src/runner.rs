use crate::cancellation::CancellationToken;
use crate::pacing::Pacing;
use crate::plan::{TraversalPlan, TraversalStep};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, unbounded};
use graphwiz_core::Algorithm;
use std::io;
use std::thread::JoinHandle;
use std::time::Duration;

/// Messages from the background runner to the owner of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    Step(TraversalStep),
    Finished { algorithm: Algorithm, path: String },
    Cancelled { algorithm: Algorithm, path: String },
}

impl TraversalEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Step(_))
    }
}

/// A plan being replayed on its own thread.
///
/// The thread never touches the model: it only sends [`TraversalEvent`]s,
/// which the owning context applies. Dropping the handle cancels the run
/// and joins the thread.
pub struct TraversalHandle {
    algorithm: Algorithm,
    token: CancellationToken,
    events: Receiver<TraversalEvent>,
    thread: Option<JoinHandle<()>>,
}

impl TraversalHandle {
    pub fn spawn(plan: TraversalPlan, pacing: Pacing) -> io::Result<Self> {
        let algorithm = plan.algorithm();
        let token = CancellationToken::new();
        let (tx, rx) = unbounded();

        let thread_token = token.clone();
        let thread = std::thread::Builder::new()
            .name(format!("graphwiz-{}", algorithm.short_name().to_lowercase()))
            .spawn(move || replay(plan, pacing, thread_token, tx))?;

        Ok(Self {
            algorithm,
            token,
            events: rx,
            thread: Some(thread),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Next pending event without blocking. `Disconnected` means the
    /// thread is gone.
    pub fn try_next(&self) -> Result<TraversalEvent, TryRecvError> {
        self.events.try_recv()
    }

    /// Next event, waiting up to `timeout`.
    pub fn next_timeout(&self, timeout: Duration) -> Result<TraversalEvent, RecvTimeoutError> {
        self.events.recv_timeout(timeout)
    }

    /// Next event, blocking until one arrives or the runner is gone.
    pub fn next_blocking(&self) -> Option<TraversalEvent> {
        self.events.recv().ok()
    }

    /// A handle over an existing channel with no thread behind it.
    #[cfg(test)]
    pub(crate) fn detached(algorithm: Algorithm, events: Receiver<TraversalEvent>) -> Self {
        Self {
            algorithm,
            token: CancellationToken::new(),
            events,
            thread: None,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancels, waits for the thread to exit and returns whatever it sent
    /// before stopping, terminal event included.
    pub fn cancel_and_wait(mut self) -> Vec<TraversalEvent> {
        self.token.cancel();
        self.join();
        self.events.try_iter().collect()
    }

    /// Waits for the thread to exit.
    pub fn join(&mut self) {
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            tracing::error!("{} runner thread panicked", self.algorithm);
        }
    }
}

impl Drop for TraversalHandle {
    fn drop(&mut self) {
        self.token.cancel();
        self.join();
    }
}

fn replay(plan: TraversalPlan, pacing: Pacing, token: CancellationToken, tx: Sender<TraversalEvent>) {
    let algorithm = plan.algorithm();
    let mut path = String::new();
    tracing::info!(
        "{} started at node {} ({} steps)",
        algorithm,
        plan.start(),
        plan.len()
    );

    for step in plan.steps() {
        if token.is_cancelled() {
            break;
        }
        let pause = pacing.duration(step.pause);
        path.clone_from(&step.path);
        if tx.send(TraversalEvent::Step(step)).is_err() {
            tracing::debug!("{} receiver dropped, stopping", algorithm);
            return;
        }
        if !token.sleep(pause) {
            break;
        }
    }

    let terminal = if token.is_cancelled() {
        tracing::info!("{} cancelled after path '{}'", algorithm, path);
        TraversalEvent::Cancelled { algorithm, path }
    } else {
        tracing::info!("{} finished with path '{}'", algorithm, path);
        TraversalEvent::Finished { algorithm, path }
    };
    let _ = tx.send(terminal);
}
