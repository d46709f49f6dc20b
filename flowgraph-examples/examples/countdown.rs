//! Countdown workflow driven step by step.
//!
//! Run with: `cargo run -p flowgraph-examples --example countdown -- 5`

use async_trait::async_trait;

use flowgraph::{Edge, Graph, Next, Node, NodeDef, NodeError, RunContext};

#[derive(Debug, Clone, Default)]
struct CountdownState {
    counter: i64,
    history: Vec<i64>,
}

struct Countdown;

impl Countdown {
    const DEF: NodeDef = NodeDef::new("Countdown", &[Edge::Node("CheckCountdown")]);
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

struct CheckCountdown;

impl CheckCountdown {
    const DEF: NodeDef = NodeDef::new("CheckCountdown", &[Edge::Node("Countdown"), Edge::End]);
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

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from: i64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(5);

    let graph = Graph::new([Countdown::DEF, CheckCountdown::DEF]).with_name("countdown");

    let state = CountdownState {
        counter: from,
        history: Vec::new(),
    };
    let mut run = graph.iter(Countdown, state, None)?;

    println!("stepping from {}:", from);
    loop {
        let step = run.next().await?;
        match step.node_name() {
            Some(name) => println!("  -> {} (counter = {})", name, run.state().counter),
            None => break,
        }
    }

    let result = run.into_result().expect("terminated run has a result");
    println!("output: {}", result.output);
    println!("history: {:?}", result.state.history);
    Ok(())
}
