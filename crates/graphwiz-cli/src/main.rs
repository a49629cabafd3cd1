use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use graphwiz_app::{Session, SessionConfig};
use graphwiz_core::Algorithm;
use graphwiz_events::{Event, EventListener};
use graphwiz_graph::{Interaction, PointerEvent};
use graphwiz_traversal::Pacing;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Spacing between generated node positions; wider than any node.
const NODE_SPACING: f32 = 100.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a BFS or DFS over a graph given on the command line", long_about = None)]
struct Args {
    /// Number of nodes, ids 0..N in creation order
    #[arg(short, long, default_value_t = 0)]
    nodes: u32,

    /// Undirected edge as "A-B"; repeat for more. Order sets neighbour order.
    #[arg(short, long = "edge", value_parser = parse_edge)]
    edges: Vec<(u32, u32)>,

    /// Traversal to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Bfs)]
    algorithm: AlgorithmArg,

    /// Replay with the GUI pauses and print the path as it grows
    #[arg(long)]
    animate: bool,

    /// Animation speed multiplier, used with --animate
    #[arg(long, default_value_t = 1.0)]
    speed: f32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    Bfs,
    Dfs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bfs => Algorithm::BreadthFirst,
            AlgorithmArg::Dfs => Algorithm::DepthFirst,
        }
    }
}

/// Mirrors session events into the log.
#[derive(Default)]
struct EventLog {
    steps: usize,
}

impl EventListener for EventLog {
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::TraversalStep { node, state } => {
                self.steps += 1;
                tracing::debug!("step {}: node {} -> {}", self.steps, node, state);
            }
            Event::CommandRejected { command, reason } => {
                tracing::warn!("{} rejected: {}", command, reason);
            }
            Event::StatusUpdate { message } => tracing::info!("{}", message),
            _ => {}
        }
    }
}

fn parse_edge(s: &str) -> Result<(u32, u32), String> {
    let (a, b) = s
        .split_once(['-', ','])
        .ok_or_else(|| format!("expected A-B, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("bad node id '{}': {}", v.trim(), e))
    };
    Ok((parse(a)?, parse(b)?))
}

fn slot(id: u32) -> (f32, f32) {
    (NODE_SPACING / 2.0 + id as f32 * NODE_SPACING, NODE_SPACING / 2.0)
}

/// Places the nodes in a row and connects them by clicking, exactly as a
/// user would on the canvas.
fn build_session(nodes: u32, edges: &[(u32, u32)], pacing: Pacing) -> Result<Session> {
    let mut session = Session::new(SessionConfig {
        pacing,
        ..SessionConfig::default()
    });
    for id in 0..nodes {
        let (x, y) = slot(id);
        session.pointer(PointerEvent::primary(x, y))?;
    }
    for &(a, b) in edges {
        if a >= nodes || b >= nodes {
            bail!("edge {a}-{b} refers to a node outside 0..{nodes}");
        }
        let (ax, ay) = slot(a);
        let (bx, by) = slot(b);
        session.pointer(PointerEvent::primary(ax, ay))?;
        match session.pointer(PointerEvent::primary(bx, by))? {
            Interaction::EdgeAdded { .. } => {}
            other => tracing::warn!("Edge {}-{} skipped: {:?}", a, b, other),
        }
    }
    Ok(session)
}

fn run(session: &mut Session, algorithm: Algorithm, animate: bool) -> Result<()> {
    let mut log = EventLog::default();
    session.events().dispatch_to(&mut log);

    if !session.run(algorithm)? {
        println!("{}", session.status().text());
        return Ok(());
    }

    if animate {
        let mut shown = String::new();
        while session.is_traversing() {
            session.pump_timeout(Duration::from_millis(100));
            session.events().dispatch_to(&mut log);
            if session.status().path() != shown {
                shown = session.status().path().to_string();
                println!("{}", session.status().text());
            }
        }
    } else {
        session.wait();
        session.events().dispatch_to(&mut log);
        println!("{}", session.status().text());
    }

    tracing::debug!("{} steps applied", log.steps);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let args = Args::parse();

    let pacing = if args.animate {
        Pacing::default().with_speed(args.speed)
    } else {
        Pacing::instant()
    };
    let mut session = build_session(args.nodes, &args.edges, pacing)?;
    run(&mut session, args.algorithm.into(), args.animate)
}
