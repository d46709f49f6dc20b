//! Events emitted while streaming a graph run.
//!
//! Produced by [`Graph::stream`](crate::Graph::stream) over a channel-backed
//! stream. A transport or UI layer can consume these to surface intermediate
//! node transitions without the engine depending on any transport.

use crate::error::GraphError;
use crate::graph::GraphRunResult;

/// One observation of a streamed run.
#[derive(Debug)]
pub enum RunEvent<S, T> {
    /// A node finished executing; `state` is a snapshot taken right after.
    Step {
        /// Name of the node that just ran.
        node: &'static str,
        /// State snapshot after that node's mutations.
        state: S,
    },
    /// The run terminated; carries the same result `Graph::run` would return.
    Done(GraphRunResult<S, T>),
    /// The run aborted; no further events follow.
    Failed(GraphError),
}
