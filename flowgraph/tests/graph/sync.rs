//! The blocking `run_sync` front end.

use flowgraph::{Graph, GraphError};

use crate::common::{CheckCountdown, Countdown, CountdownState};

/// **Scenario**: run_sync produces the same result as run for an equivalent
/// initial state.
#[test]
fn run_sync_matches_run() {
    let graph = Graph::new([Countdown::DEF, CheckCountdown::DEF]);
    let result = graph
        .run_sync(Countdown, CountdownState::starting_at(3), None)
        .expect("run completes");

    assert_eq!(result.output, 0);
    assert_eq!(result.state.history, vec![2, 1, 0]);
}

/// **Scenario**: run_sync refuses to nest inside an async runtime.
#[tokio::test]
async fn run_sync_inside_runtime_errors() {
    let graph = Graph::new([Countdown::DEF, CheckCountdown::DEF]);
    let err = graph
        .run_sync(Countdown, CountdownState::starting_at(1), None)
        .expect_err("nested runtime is rejected");
    assert!(matches!(err, GraphError::SyncInAsyncContext));
}
