//! The demo countdown workflow the binary runs and renders.
//!
//! Two node types: `Countdown` decrements the counter and records it,
//! `CheckCountdown` loops back while the counter is positive and otherwise
//! terminates with the final value.

use async_trait::async_trait;
use serde::Serialize;

use flowgraph::{Edge, Graph, Next, Node, NodeDef, NodeError, RunContext};

/// State threaded through the countdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountdownState {
    pub counter: i64,
    /// Counter value after each decrement.
    pub history: Vec<i64>,
}

impl CountdownState {
    pub fn starting_at(counter: i64) -> Self {
        Self {
            counter,
            history: Vec::new(),
        }
    }
}

/// Decrements the counter and hands off to the check.
pub struct Countdown;

impl Countdown {
    pub const DEF: NodeDef = NodeDef::new("Countdown", &[Edge::Node("CheckCountdown")]);
}

#[async_trait]
impl Node<CountdownState, (), i64> for Countdown {
    fn def(&self) -> NodeDef {
        Self::DEF
    }

    async fn run(
        &self,
        ctx: &mut RunContext<'_, CountdownState>,
    ) -> Result<Next<CountdownState, (), i64>, NodeError> {
        ctx.state.counter -= 1;
        ctx.state.history.push(ctx.state.counter);
        Ok(Next::node(CheckCountdown))
    }
}

/// Loops back while the counter is positive, else ends with its value.
pub struct CheckCountdown;

impl CheckCountdown {
    pub const DEF: NodeDef =
        NodeDef::new("CheckCountdown", &[Edge::Node("Countdown"), Edge::End]);
}

#[async_trait]
impl Node<CountdownState, (), i64> for CheckCountdown {
    fn def(&self) -> NodeDef {
        Self::DEF
    }

    async fn run(
        &self,
        ctx: &mut RunContext<'_, CountdownState>,
    ) -> Result<Next<CountdownState, (), i64>, NodeError> {
        if ctx.state.counter > 0 {
            Ok(Next::node(Countdown))
        } else {
            Ok(Next::end(ctx.state.counter))
        }
    }
}

/// Builds the countdown graph.
pub fn countdown_graph() -> Graph<CountdownState, (), i64> {
    Graph::new([Countdown::DEF, CheckCountdown::DEF]).with_name("countdown")
}
