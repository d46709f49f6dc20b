//! Workflow lifecycle: re-run a graph until it completes.
//!
//! The engine itself recovers nothing; this is the caller-side loop for
//! long-lived workflows that should survive individual run failures by
//! restarting with fresh state. Cancellation propagates by dropping the
//! returned future.

use std::sync::Arc;

use crate::error::GraphError;
use crate::graph::{Graph, GraphRunResult, Node};

/// Runs `graph` repeatedly until one run completes, rebuilding the start
/// node and initial state before every attempt.
///
/// Each failed attempt is reported to `on_error` and then retried with a
/// fresh start node and state; `deps` is shared across attempts. There is no
/// backoff: pacing, give-up policies, and timeouts belong to the caller.
pub async fn run_loop<S, D, T, N>(
    graph: &Graph<S, D, T>,
    mut start: impl FnMut() -> N,
    mut initial_state: impl FnMut() -> S,
    deps: Option<Arc<D>>,
    mut on_error: impl FnMut(&GraphError),
) -> GraphRunResult<S, T>
where
    N: Node<S, D, T> + 'static,
    S: Send + Sync + 'static,
    D: Send + Sync + 'static,
    T: Send + 'static,
{
    loop {
        match graph.run(start(), initial_state(), deps.clone()).await {
            Ok(result) => return result,
            Err(err) => {
                tracing::warn!(error = %err, "graph run failed, restarting");
                on_error(&err);
            }
        }
    }
}
