//! Pre-execution gating via `Node::validate`.

use std::sync::Arc;

use flowgraph::{Graph, GraphError};

use crate::common::{Budget, CounterState, Gate, GateState, Spend};

/// **Scenario**: validate returning false aborts the run with
/// NodeValidationFailed and executes zero effects from that node's run.
#[tokio::test]
async fn closed_gate_fails_validation_with_no_effects() {
    let graph = Graph::new([Gate::DEF]);
    let mut run = graph
        .iter(Gate, GateState::default(), None)
        .expect("start node is registered");

    let err = run.next().await.expect_err("gate is closed");
    match err {
        GraphError::NodeValidationFailed(name) => assert_eq!(name, "Gate"),
        other => panic!("expected NodeValidationFailed, got {:?}", other),
    }
    assert!(!run.state().entered, "run must not have executed");
}

/// **Scenario**: validation failure is fatal to a completion-driven run.
#[tokio::test]
async fn closed_gate_aborts_batch_run() {
    let graph = Graph::new([Gate::DEF]);
    let err = graph
        .run(Gate, GateState::default(), None)
        .await
        .expect_err("gate is closed");
    assert!(matches!(err, GraphError::NodeValidationFailed("Gate")));
}

/// **Scenario**: on validation failure the node stays pending, so a stepping
/// caller can repair state and continue.
#[tokio::test]
async fn stepping_caller_can_reopen_gate() {
    let graph = Graph::new([Gate::DEF]);
    let mut run = graph
        .iter(Gate, GateState::default(), None)
        .expect("start node is registered");

    run.next().await.expect_err("gate is closed");
    assert_eq!(run.next_node().map(|n| n.def().name()), Some("Gate"));

    run.state_mut().open = true;
    let step = run.next().await.expect("gate is open now");
    assert!(step.is_done());
    assert!(run.state().entered);
}

/// **Scenario**: an open gate validates and executes normally.
#[tokio::test]
async fn open_gate_executes() {
    let graph = Graph::new([Gate::DEF]);
    let result = graph
        .run(
            Gate,
            GateState {
                open: true,
                entered: false,
            },
            None,
        )
        .await
        .expect("run completes");
    assert!(result.state.entered);
}

/// **Scenario**: validate reads deps; a denying budget fails the first step.
#[tokio::test]
async fn deps_can_deny_validation() {
    let graph = Graph::new([Spend::DEF]);
    let deps = Arc::new(Budget {
        allow: false,
        cap: 5,
    });
    let err = graph
        .run(Spend, CounterState::default(), Some(deps))
        .await
        .expect_err("budget denies execution");
    assert!(matches!(err, GraphError::NodeValidationFailed("Spend")));
}
