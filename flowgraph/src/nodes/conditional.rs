//! Conditional node: branch on the context without writing a node type.
//!
//! Covers the common "inspect state, pick a branch" step. The author supplies
//! the descriptor, so the declared edges name the real branch targets and the
//! mermaid diagram stays accurate.

use async_trait::async_trait;

use crate::error::NodeError;
use crate::graph::{Next, Node, NodeDef, RunContext};

/// A node that evaluates a predicate over the context and continues with one
/// of two transitions.
///
/// Branches are factories rather than node values so the same `Conditional`
/// instance can run any number of times (e.g. inside a loop-shaped chain).
///
/// ```
/// use flowgraph::{Conditional, Edge, Next, NodeDef, RunContext};
///
/// #[derive(Default)]
/// struct FlagState {
///     flag: bool,
/// }
///
/// let check: Conditional<FlagState, (), &'static str> = Conditional::new(
///     NodeDef::new("Check", &[Edge::End]),
///     |ctx: &RunContext<'_, FlagState, ()>| ctx.state.flag,
///     || Next::end("t"),
///     || Next::end("f"),
/// );
/// # let _ = check;
/// ```
pub struct Conditional<S, D = (), T = ()> {
    def: NodeDef,
    predicate: Box<dyn Fn(&RunContext<'_, S, D>) -> bool + Send + Sync>,
    when_true: Box<dyn Fn() -> Next<S, D, T> + Send + Sync>,
    when_false: Box<dyn Fn() -> Next<S, D, T> + Send + Sync>,
}

impl<S, D, T> Conditional<S, D, T> {
    /// Builds a conditional node from its descriptor, predicate, and the two
    /// branch factories.
    pub fn new(
        def: NodeDef,
        predicate: impl Fn(&RunContext<'_, S, D>) -> bool + Send + Sync + 'static,
        when_true: impl Fn() -> Next<S, D, T> + Send + Sync + 'static,
        when_false: impl Fn() -> Next<S, D, T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            def,
            predicate: Box::new(predicate),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }
}

#[async_trait]
impl<S, D, T> Node<S, D, T> for Conditional<S, D, T>
where
    S: Send + Sync + 'static,
    D: Send + Sync + 'static,
    T: Send + 'static,
{
    fn def(&self) -> NodeDef {
        self.def
    }

    async fn run(&self, ctx: &mut RunContext<'_, S, D>) -> Result<Next<S, D, T>, NodeError> {
        if (self.predicate)(ctx) {
            Ok((self.when_true)())
        } else {
            Ok((self.when_false)())
        }
    }
}
