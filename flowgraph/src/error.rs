//! Engine error types.
//!
//! `GraphError` is what `Graph::run`, `Graph::run_sync` and `GraphRun::next`
//! return; `NodeError` carries whatever failed inside a node body and is
//! wrapped into `GraphError::NodeExecutionFailed` with the node's name.
//! Rendering failures live in [`crate::mermaid::RenderError`], not here: they
//! concern an external service, not workflow logic.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Error raised inside a node's `run`.
///
/// An opaque wrapper around the node's own error so the cause chain survives
/// into `GraphError::NodeExecutionFailed`. Build one from any error with
/// [`NodeError::new`] or from a message with [`NodeError::msg`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct NodeError(Box<dyn StdError + Send + Sync>);

impl NodeError {
    /// Wraps an existing error as the node failure cause.
    pub fn new(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self(err.into())
    }

    /// Builds a node failure from a plain message.
    pub fn msg(msg: impl fmt::Display) -> Self {
        Self(msg.to_string().into())
    }
}

/// Error aborting a graph run.
///
/// The engine recovers nothing: every variant is fatal to the run that
/// produced it, and the caller decides whether to retry with fresh state
/// (see [`crate::runner::run_loop`]), restart, or abandon.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The start node's type is not registered in the graph. Checked once at
    /// entry, before any node executes and before state is touched.
    #[error("start node `{0}` is not registered in the graph")]
    UnknownStartNode(&'static str),

    /// A node returned by a previous step is not registered in the graph.
    /// Checked before that node executes.
    #[error("node `{0}` is not registered in the graph")]
    UnknownNode(&'static str),

    /// A node's `validate` returned false. The run aborts rather than
    /// skipping: there is no well-defined next node to fall back to.
    #[error("node `{0}` failed validation")]
    NodeValidationFailed(&'static str),

    /// A node's `run` returned an error; the cause is preserved.
    #[error("node `{node}` failed during execution")]
    NodeExecutionFailed {
        /// Name of the node whose `run` failed.
        node: &'static str,
        /// The underlying node error.
        #[source]
        source: NodeError,
    },

    /// `run_sync` was called from within an async runtime; use `run` there.
    #[error("run_sync called from within an async runtime; use run instead")]
    SyncInAsyncContext,

    /// `run_sync` could not build its blocking runtime.
    #[error("failed to build runtime for run_sync")]
    Runtime(#[source] std::io::Error),
}
