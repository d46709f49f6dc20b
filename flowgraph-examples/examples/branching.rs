//! Approval workflow: one policy in deps, two requests, two branches.
//!
//! Run with: `cargo run -p flowgraph-examples --example branching`

use std::sync::Arc;

use flowgraph_examples::approval::{approval_graph, Policy, Request, Submit};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = approval_graph();
    let policy = Arc::new(Policy {
        auto_approve_limit: 1000,
    });

    for amount in [250, 5000] {
        let result = graph
            .run(Submit, Request::for_amount(amount), Some(policy.clone()))
            .await?;
        println!("{}", result.output);
        println!("state: {}", serde_json::to_string(&result.state)?);
    }

    Ok(())
}
