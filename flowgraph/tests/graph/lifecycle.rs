//! `runner::run_loop`: restart-on-error workflow lifecycle.

use async_trait::async_trait;
use flowgraph::{run_loop, Edge, Graph, Next, Node, NodeDef, NodeError, RunContext};

#[derive(Debug, Clone, Default)]
struct FlakyState {
    fail: bool,
}

struct Flaky;

impl Flaky {
    const DEF: NodeDef = NodeDef::new("Flaky", &[Edge::End]);
}

#[async_trait]
impl Node<FlakyState, (), &'static str> for Flaky {
    fn def(&self) -> NodeDef {
        Self::DEF
    }

    async fn run(
        &self,
        ctx: &mut RunContext<'_, FlakyState>,
    ) -> Result<Next<FlakyState, (), &'static str>, NodeError> {
        if ctx.state.fail {
            Err(NodeError::msg("transient outage"))
        } else {
            Ok(Next::end("recovered"))
        }
    }
}

/// **Scenario**: the first attempt fails, the error reaches the callback,
/// and the second attempt's result is returned.
#[tokio::test]
async fn run_loop_restarts_after_failure() {
    let graph = Graph::new([Flaky::DEF]);
    let mut attempts = 0;
    let mut errors = Vec::new();

    let result = run_loop(
        &graph,
        || Flaky,
        || {
            attempts += 1;
            FlakyState {
                fail: attempts == 1,
            }
        },
        None,
        |err| errors.push(err.to_string()),
    )
    .await;

    assert_eq!(result.output, "recovered");
    assert_eq!(attempts, 2);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Flaky"), "{}", errors[0]);
}

/// **Scenario**: a clean first run returns immediately without touching the
/// error callback.
#[tokio::test]
async fn run_loop_returns_first_success() {
    let graph = Graph::new([Flaky::DEF]);
    let mut attempts = 0;
    let mut failures = 0;

    let result = run_loop(
        &graph,
        || Flaky,
        || {
            attempts += 1;
            FlakyState { fail: false }
        },
        None,
        |_| failures += 1,
    )
    .await;

    assert_eq!(result.output, "recovered");
    assert_eq!(attempts, 1);
    assert_eq!(failures, 0);
}
