//! One execution of a graph: the stepping engine behind `run` and `iter`.
//!
//! A [`GraphRun`] owns the state and deps for exactly one execution and holds
//! either the node pending execution or the final output. `Graph::run` is a
//! loop over [`GraphRun::next`], so batch execution and manual stepping are
//! two front ends over the same step function and cannot diverge.

use std::sync::Arc;

use crate::error::GraphError;
use crate::graph::context::RunContext;
use crate::graph::node::{Next, Node};
use crate::graph::{Graph, GraphRunResult};

/// What one advance of a run yielded: the node now pending, or the output.
pub enum Step<'r, S, D = (), T = ()> {
    /// Execution moved on to this node; it runs on the following advance.
    Next(&'r dyn Node<S, D, T>),
    /// The run terminated; the output is also available via
    /// [`GraphRun::into_result`].
    Done(&'r T),
}

impl<'r, S, D, T> std::fmt::Debug for Step<'r, S, D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Next(node) => f.debug_tuple("Next").field(&node.def().name()).finish(),
            Self::Done(_) => f.debug_tuple("Done").finish(),
        }
    }
}

impl<'r, S, D, T> Step<'r, S, D, T> {
    /// Name of the pending node, or `None` once the run is done.
    pub fn node_name(&self) -> Option<&'static str> {
        match self {
            Self::Next(node) => Some(node.def().name()),
            Self::Done(_) => None,
        }
    }

    /// Whether this step terminated the run.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

enum Phase<S, D, T> {
    Pending(Box<dyn Node<S, D, T>>),
    Done(T),
}

/// A single execution of a [`Graph`] from one start node.
///
/// Created by [`Graph::iter`]. Each [`next`](GraphRun::next) call executes
/// exactly one node; between calls the caller may inspect
/// [`state`](GraphRun::state) and [`next_node`](GraphRun::next_node) or force
/// a different node with [`next_with`](GraphRun::next_with). Dropping the run
/// releases the state, deps handle, and any pending node it holds.
///
/// On error the pending node stays current: a completion-driven `Graph::run`
/// treats every error as fatal, while a manually stepped caller may still
/// intervene via `next_with`.
pub struct GraphRun<'g, S, D = (), T = ()> {
    graph: &'g Graph<S, D, T>,
    state: S,
    deps: Option<Arc<D>>,
    phase: Phase<S, D, T>,
}

impl<'g, S, D, T> GraphRun<'g, S, D, T>
where
    S: Send + Sync + 'static,
    D: Send + Sync + 'static,
    T: Send + 'static,
{
    pub(crate) fn new(
        graph: &'g Graph<S, D, T>,
        start: Box<dyn Node<S, D, T>>,
        state: S,
        deps: Option<Arc<D>>,
    ) -> Self {
        Self {
            graph,
            state,
            deps,
            phase: Phase::Pending(start),
        }
    }

    /// Executes the pending node and yields what becomes current: the next
    /// pending node, or the run output.
    ///
    /// Once the run has terminated, further calls keep yielding
    /// [`Step::Done`] without executing anything.
    ///
    /// # Errors
    ///
    /// `UnknownNode` if the pending node's type is not registered,
    /// `NodeValidationFailed` if its `validate` returned false (its `run` is
    /// not called), `NodeExecutionFailed` if its `run` failed.
    pub async fn next(&mut self) -> Result<Step<'_, S, D, T>, GraphError> {
        let transition = match &self.phase {
            Phase::Done(_) => None,
            Phase::Pending(node) => {
                let def = node.def();
                // Entry membership is checked by `Graph::iter`; hitting this
                // means a node returned a type outside the registry.
                if !self.graph.contains(def.name()) {
                    return Err(GraphError::UnknownNode(def.name()));
                }
                let mut ctx = RunContext::new(&mut self.state, self.deps.as_deref());
                if !node.validate(&ctx) {
                    tracing::warn!(node = def.name(), "node failed validation");
                    return Err(GraphError::NodeValidationFailed(def.name()));
                }
                tracing::debug!(node = def.name(), "executing node");
                match node.run(&mut ctx).await {
                    Ok(next) => {
                        tracing::debug!(node = def.name(), next = ?next, "node complete");
                        Some(next)
                    }
                    Err(source) => {
                        tracing::warn!(node = def.name(), error = %source, "node failed");
                        return Err(GraphError::NodeExecutionFailed {
                            node: def.name(),
                            source,
                        });
                    }
                }
            }
        };

        if let Some(next) = transition {
            self.phase = match next {
                Next::Node(node) => Phase::Pending(node),
                Next::End(output) => Phase::Done(output),
            };
        }

        Ok(match &self.phase {
            Phase::Pending(node) => Step::Next(node.as_ref()),
            Phase::Done(output) => Step::Done(output),
        })
    }

    /// Executes a caller-supplied node instead of the pending one, bypassing
    /// the engine-computed successor. The supplied node's type must be
    /// registered in the graph.
    pub async fn next_with(
        &mut self,
        node: impl Node<S, D, T> + 'static,
    ) -> Result<Step<'_, S, D, T>, GraphError> {
        self.phase = Phase::Pending(Box::new(node));
        self.next().await
    }

    /// The node pending execution, or `None` once the run has terminated.
    pub fn next_node(&self) -> Option<&dyn Node<S, D, T>> {
        match &self.phase {
            Phase::Pending(node) => Some(node.as_ref()),
            Phase::Done(_) => None,
        }
    }

    /// The run output, available once the run has terminated.
    pub fn output(&self) -> Option<&T> {
        match &self.phase {
            Phase::Done(output) => Some(output),
            Phase::Pending(_) => None,
        }
    }

    /// Whether the run has terminated.
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// The run's state, mutated in place by executed nodes.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable access to the run's state between steps.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// The run's read-only deps, if any.
    pub fn deps(&self) -> Option<&D> {
        self.deps.as_deref()
    }

    /// Consumes the run into its result. `Some` only for a terminated run;
    /// the result is produced exactly once.
    pub fn into_result(self) -> Option<GraphRunResult<S, T>> {
        match self.phase {
            Phase::Done(output) => Some(GraphRunResult {
                output,
                state: self.state,
            }),
            Phase::Pending(_) => None,
        }
    }
}
