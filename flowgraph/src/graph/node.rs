//! Node contract: descriptor, transition union, and the `Node` trait.
//!
//! A node is one unit of work. Its type declares, via [`NodeDef`], the
//! exhaustive set of transitions its `run` may take; the engine checks the
//! descriptor name against the graph registry and the visualizer reads the
//! declared edges without ever executing anything.

use async_trait::async_trait;

use crate::error::NodeError;
use crate::graph::context::RunContext;

/// One declared transition out of a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Transition to the node type with this name.
    Node(&'static str),
    /// Terminal transition: the node may end the run.
    End,
}

/// Static descriptor of a node type: its name plus declared transitions.
///
/// Node types expose one as an associated constant and return it from
/// [`Node::def`]:
///
/// ```
/// use flowgraph::{Edge, NodeDef};
///
/// struct Countdown;
///
/// impl Countdown {
///     pub const DEF: NodeDef = NodeDef::new("Countdown", &[Edge::Node("CheckCountdown")]);
/// }
/// ```
///
/// The name doubles as the registry key and the mermaid label, so it must be
/// unique within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeDef {
    name: &'static str,
    edges: &'static [Edge],
}

impl NodeDef {
    /// Creates a descriptor from a name and the declared transition set.
    pub const fn new(name: &'static str, edges: &'static [Edge]) -> Self {
        Self { name, edges }
    }

    /// The node type's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared transitions, in declaration order.
    pub fn edges(&self) -> &'static [Edge] {
        self.edges
    }

    /// Whether any declared transition is terminal.
    pub fn ends(&self) -> bool {
        self.edges.iter().any(|e| matches!(e, Edge::End))
    }
}

/// What a node's `run` produced: continue with another node, or terminate
/// with the workflow output.
///
/// The engine matches on the variant; there is no runtime type inspection.
pub enum Next<S, D = (), T = ()> {
    /// Continue the run with this node.
    Node(Box<dyn Node<S, D, T>>),
    /// Terminate the run with the workflow output.
    End(T),
}

impl<S, D, T> Next<S, D, T> {
    /// Continues with the given node, boxing it.
    pub fn node(node: impl Node<S, D, T> + 'static) -> Self {
        Self::Node(Box::new(node))
    }

    /// Terminates with the given output.
    pub fn end(output: T) -> Self {
        Self::End(output)
    }
}

impl<S, D, T> std::fmt::Debug for Next<S, D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node(node) => f.debug_tuple("Node").field(&node.def().name()).finish(),
            Self::End(_) => f.debug_tuple("End").finish(),
        }
    }
}

/// One unit of work in a graph, generic over state `S`, read-only deps `D`,
/// and run output `T`.
///
/// `run` is the sole place business logic executes: it may mutate
/// `ctx.state`, read `ctx.deps`, and must return either another registered
/// node or `Next::End`. `validate` gates execution; returning false aborts
/// the run with `GraphError::NodeValidationFailed`.
///
/// **Interaction**: boxed instances flow through [`Next`]; descriptors are
/// registered with [`Graph::new`](crate::Graph::new) and read by the
/// mermaid visualizer.
#[async_trait]
pub trait Node<S, D = (), T = ()>: Send + Sync {
    /// Static descriptor for this node's type.
    ///
    /// Implementations return a constant; two instances of one type must
    /// return equal descriptors.
    fn def(&self) -> NodeDef;

    /// Whether this node may execute. Defaults to true.
    ///
    /// A cheap gate over the context; business logic, including anything that
    /// suspends, belongs in `run`.
    fn validate(&self, ctx: &RunContext<'_, S, D>) -> bool {
        let _ = ctx;
        true
    }

    /// Executes the node and returns the next transition.
    async fn run(&self, ctx: &mut RunContext<'_, S, D>) -> Result<Next<S, D, T>, NodeError>;
}
