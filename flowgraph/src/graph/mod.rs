//! Graph registry and execution front ends.
//!
//! A [`Graph`] is the immutable set of node-type descriptors participating in
//! one workflow, plus an optional name. Build it once with [`Graph::new`],
//! then reuse it across runs: [`Graph::run`] / [`Graph::run_sync`] drive a
//! run to completion, [`Graph::iter`] hands out a [`GraphRun`] for manual
//! stepping, and [`Graph::stream`] emits node transitions over a channel.

mod context;
mod node;
mod run;

use std::collections::HashSet;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

pub use context::RunContext;
pub use node::{Edge, Next, Node, NodeDef};
pub use run::{GraphRun, Step};

use crate::error::GraphError;
use crate::mermaid::{self, ImageFormat, RenderConfig, RenderError};
use crate::stream::RunEvent;

/// The final result of a completed run: the `Next::End` payload and the
/// state as the last node left it. Produced exactly once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRunResult<S, T> {
    /// Output carried by the terminal transition.
    pub output: T,
    /// Final state, mutated in place across the whole run.
    pub state: S,
}

/// Immutable registry of the node types making up one workflow.
///
/// Generic over state `S`, read-only deps `D`, and run output `T`. Holds no
/// per-run data, so one graph may back any number of sequential or concurrent
/// runs; cloning is cheap (descriptors are `'static`).
///
/// **Interaction**: registration takes [`NodeDef`] descriptors; execution
/// takes a start node instance per run and checks its type (and, defensively,
/// every subsequently returned node's type) against the registry.
pub struct Graph<S, D = (), T = ()> {
    defs: Vec<NodeDef>,
    names: HashSet<&'static str>,
    name: Option<String>,
    _marker: PhantomData<fn(S, D) -> T>,
}

impl<S, D, T> Clone for Graph<S, D, T> {
    fn clone(&self) -> Self {
        Self {
            defs: self.defs.clone(),
            names: self.names.clone(),
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, D, T> Graph<S, D, T> {
    /// Creates a graph from an explicit set of node descriptors. There is no
    /// implicit discovery; a duplicate name keeps its first descriptor.
    pub fn new(nodes: impl IntoIterator<Item = NodeDef>) -> Self {
        let mut names = HashSet::new();
        let mut defs = Vec::new();
        for def in nodes {
            if names.insert(def.name()) {
                defs.push(def);
            }
        }
        Self {
            defs,
            names,
            name: None,
            _marker: PhantomData,
        }
    }

    /// Names the graph; the name becomes a mermaid subgraph title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The graph's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Registered descriptors, in registration order.
    pub fn node_defs(&self) -> &[NodeDef] {
        &self.defs
    }

    /// Whether a node type with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Renders the registered types and their declared transitions as
    /// mermaid diagram text. Pure introspection; nothing executes.
    pub fn to_mermaid(&self) -> String {
        mermaid::diagram(self.name.as_deref(), &self.defs)
    }

    /// Builds a mermaid.ink URL rendering this graph's diagram.
    pub fn to_mermaid_ink_url(&self, format: ImageFormat, config: &RenderConfig) -> String {
        mermaid::ink_url(&self.to_mermaid(), format, config)
    }

    /// Fetches the rendered diagram from mermaid.ink and writes it to
    /// `path`. The only operation here that talks to an external service;
    /// its failures are [`RenderError`], never [`GraphError`].
    pub async fn save_as_image(
        &self,
        path: impl AsRef<Path>,
        format: ImageFormat,
        config: &RenderConfig,
    ) -> Result<(), RenderError> {
        mermaid::save_as_image(&self.to_mermaid(), path, format, config).await
    }
}

impl<S, D, T> Graph<S, D, T>
where
    S: Send + Sync + 'static,
    D: Send + Sync + 'static,
    T: Send + 'static,
{
    /// Starts a run for manual stepping.
    ///
    /// The start node's type is checked here, before any execution and
    /// before state is touched. The returned [`GraphRun`] owns `state` and
    /// `deps` for its whole life and releases them on drop.
    ///
    /// # Errors
    ///
    /// `UnknownStartNode` if the start node's type is not registered.
    pub fn iter(
        &self,
        start: impl Node<S, D, T> + 'static,
        state: S,
        deps: Option<Arc<D>>,
    ) -> Result<GraphRun<'_, S, D, T>, GraphError> {
        let def = start.def();
        if !self.contains(def.name()) {
            return Err(GraphError::UnknownStartNode(def.name()));
        }
        tracing::debug!(
            graph = self.name.as_deref().unwrap_or("unnamed"),
            start = def.name(),
            "starting graph run"
        );
        Ok(GraphRun::new(self, Box::new(start), state, deps))
    }

    /// Runs the graph from `start` until a node terminates it.
    ///
    /// Implemented as a loop over [`GraphRun::next`], so driving a run
    /// manually yields the identical result. Cancellation is cooperative:
    /// dropping the returned future aborts the in-flight node and nothing
    /// further executes; state keeps that node's partial mutations.
    ///
    /// # Errors
    ///
    /// Any [`GraphError`] surfaced by entry check or stepping; all fatal.
    pub async fn run(
        &self,
        start: impl Node<S, D, T> + 'static,
        state: S,
        deps: Option<Arc<D>>,
    ) -> Result<GraphRunResult<S, T>, GraphError> {
        let mut run = self.iter(start, state, deps)?;
        loop {
            if run.next().await?.is_done() {
                break;
            }
        }
        Ok(run
            .into_result()
            .expect("terminated run produces a result"))
    }

    /// Same contract as [`Graph::run`] for callers without an async context:
    /// blocks on a private current-thread runtime.
    ///
    /// # Errors
    ///
    /// `SyncInAsyncContext` when called from inside a tokio runtime, plus
    /// everything [`Graph::run`] returns.
    pub fn run_sync(
        &self,
        start: impl Node<S, D, T> + 'static,
        state: S,
        deps: Option<Arc<D>>,
    ) -> Result<GraphRunResult<S, T>, GraphError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(GraphError::SyncInAsyncContext);
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(GraphError::Runtime)?;
        runtime.block_on(self.run(start, state, deps))
    }

    /// Runs the graph on a spawned task, emitting one [`RunEvent::Step`] per
    /// executed node (with a state snapshot) and finally [`RunEvent::Done`]
    /// or [`RunEvent::Failed`].
    pub fn stream(
        &self,
        start: impl Node<S, D, T> + 'static,
        state: S,
        deps: Option<Arc<D>>,
    ) -> ReceiverStream<RunEvent<S, T>>
    where
        S: Clone,
    {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();

        tokio::spawn(async move {
            let mut run = match graph.iter(start, state, deps) {
                Ok(run) => run,
                Err(err) => {
                    let _ = tx.send(RunEvent::Failed(err)).await;
                    return;
                }
            };
            loop {
                let executing = match run.next_node() {
                    Some(node) => node.def().name(),
                    None => break,
                };
                // Reduce the step outcome to Send-only data (done flag plus a
                // state snapshot) so no borrow of the non-`Send` `Step` is held
                // across the awaits below.
                let outcome = match run.next().await {
                    Ok(step) => Ok((step.is_done(), run.state().clone())),
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok((done, snapshot)) => {
                        let _ = tx
                            .send(RunEvent::Step {
                                node: executing,
                                state: snapshot,
                            })
                            .await;
                        if done {
                            break;
                        }
                    }
                    Err(err) => {
                        let _ = tx.send(RunEvent::Failed(err)).await;
                        return;
                    }
                }
            }
            if let Some(result) = run.into_result() {
                let _ = tx.send(RunEvent::Done(result)).await;
            }
        });

        ReceiverStream::new(rx)
    }
}
