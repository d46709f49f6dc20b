//! Observe an approval run as a stream of node transitions.
//!
//! Run with: `cargo run -p flowgraph-examples --example streaming`

use std::sync::Arc;

use tokio_stream::StreamExt;

use flowgraph::RunEvent;
use flowgraph_examples::approval::{approval_graph, Policy, Request, Submit};

#[tokio::main]
async fn main() {
    let graph = approval_graph();
    let policy = Arc::new(Policy {
        auto_approve_limit: 1000,
    });

    let mut events = graph.stream(Submit, Request::for_amount(250), Some(policy));
    while let Some(event) = events.next().await {
        match event {
            RunEvent::Step { node, state } => {
                println!("ran {} (approved = {:?})", node, state.approved);
            }
            RunEvent::Done(result) => println!("done: {}", result.output),
            RunEvent::Failed(err) => eprintln!("failed: {}", err),
        }
    }
}
