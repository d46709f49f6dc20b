//! # flowgraph
//!
//! A graph workflow engine: typed node units chained through one mutable
//! state value until a terminal transition produces the run's output.
//!
//! ## Design Principles
//!
//! - **Nodes return their successor**: each node's `run` yields [`Next`] —
//!   either another node instance or `Next::End(output)`. The engine matches
//!   on the variant; there is no runtime type inspection.
//! - **One owned state per run**: a run owns its state and hands nodes a
//!   `&mut` through [`RunContext`]; the same value is mutated in place for
//!   the whole run. Deps are shared read-only.
//! - **Declared transitions**: every node type carries a [`NodeDef`] naming
//!   its possible successors, so graphs can be visualized without executing
//!   anything.
//! - **Strictly sequential**: one node at a time per run; no parallel node
//!   execution, no retries, no cycle detection — termination is composed by
//!   the workflow author.
//!
//! ## Main Modules
//!
//! - [`graph`]: [`Graph`], [`GraphRun`], [`Node`], [`Next`] — build and run
//!   workflows, batch or stepwise.
//! - [`mermaid`]: diagram text, mermaid.ink URLs, image download.
//! - [`nodes`]: reusable node building blocks ([`Conditional`]).
//! - [`runner`]: [`run_loop`], the restart-on-error lifecycle loop.
//! - [`stream`]: [`RunEvent`], emitted by [`Graph::stream`].
//!
//! ## Quick Start
//!
//! ```
//! use async_trait::async_trait;
//! use flowgraph::{Edge, Graph, Next, Node, NodeDef, NodeError, RunContext};
//!
//! #[derive(Default)]
//! struct CounterState {
//!     value: i64,
//! }
//!
//! struct Increment;
//!
//! impl Increment {
//!     const DEF: NodeDef = NodeDef::new("Increment", &[Edge::Node("Increment"), Edge::End]);
//! }
//!
//! #[async_trait]
//! impl Node<CounterState, (), i64> for Increment {
//!     fn def(&self) -> NodeDef {
//!         Self::DEF
//!     }
//!
//!     async fn run(
//!         &self,
//!         ctx: &mut RunContext<'_, CounterState>,
//!     ) -> Result<Next<CounterState, (), i64>, NodeError> {
//!         ctx.state.value += 1;
//!         if ctx.state.value < 3 {
//!             Ok(Next::node(Increment))
//!         } else {
//!             Ok(Next::end(ctx.state.value))
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let graph = Graph::new([Increment::DEF]).with_name("counter");
//! let result = graph
//!     .run(Increment, CounterState::default(), None)
//!     .await
//!     .unwrap();
//! assert_eq!(result.output, 3);
//! assert_eq!(result.state.value, 3);
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod mermaid;
pub mod nodes;
pub mod runner;
pub mod stream;

pub use error::{GraphError, NodeError};
pub use graph::{Edge, Graph, GraphRun, GraphRunResult, Next, Node, NodeDef, RunContext, Step};
pub use mermaid::{ImageFormat, MermaidTheme, RenderConfig, RenderError};
pub use nodes::Conditional;
pub use runner::run_loop;
pub use stream::RunEvent;
