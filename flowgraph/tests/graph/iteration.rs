//! Manual stepping: `Graph::iter`, `GraphRun::next`, overrides, results.

use flowgraph::{Graph, Step};

use crate::common::{
    Check, CheckCountdown, Countdown, CountdownState, CounterState, FalseBranch, FlagState,
    Increment, TrueBranch,
};

/// **Scenario**: stepping yields each node in chain order and finally the
/// output, with state advancing one node at a time.
#[tokio::test]
async fn stepping_visits_nodes_in_order() {
    let graph = Graph::new([Countdown::DEF, CheckCountdown::DEF]);
    let mut run = graph
        .iter(Countdown, CountdownState::starting_at(2), None)
        .expect("start node is registered");

    assert_eq!(run.next_node().map(|n| n.def().name()), Some("Countdown"));

    let step = run.next().await.expect("step");
    assert_eq!(step.node_name(), Some("CheckCountdown"));
    assert_eq!(run.state().counter, 1);

    let step = run.next().await.expect("step");
    assert_eq!(step.node_name(), Some("Countdown"));
    assert_eq!(run.state().counter, 1, "check node does not mutate");

    let step = run.next().await.expect("step");
    assert_eq!(step.node_name(), Some("CheckCountdown"));
    assert_eq!(run.state().counter, 0);

    let step = run.next().await.expect("step");
    assert!(step.is_done());
    assert_eq!(run.output(), Some(&0));
    assert!(run.next_node().is_none());
}

/// **Scenario**: driving a run via iteration produces the identical result
/// `Graph::run` produces from an equivalent initial state.
#[tokio::test]
async fn iteration_is_equivalent_to_run() {
    let graph = Graph::new([Countdown::DEF, CheckCountdown::DEF]);

    let batch = graph
        .run(Countdown, CountdownState::starting_at(5), None)
        .await
        .expect("batch run");

    let mut run = graph
        .iter(Countdown, CountdownState::starting_at(5), None)
        .expect("iter run");
    while !run.next().await.expect("step").is_done() {}
    let stepped = run.into_result().expect("terminated run has a result");

    assert_eq!(batch, stepped);
}

/// **Scenario**: next_with forces a caller-supplied node in place of the
/// engine-computed successor.
#[tokio::test]
async fn next_with_overrides_successor() {
    let graph = Graph::new([Check::DEF, TrueBranch::DEF, FalseBranch::DEF]);
    let mut run = graph
        .iter(Check, FlagState { flag: true }, None)
        .expect("start node is registered");

    let step = run.next().await.expect("step");
    assert_eq!(step.node_name(), Some("TrueBranch"));

    // Override the computed TrueBranch and take the other branch.
    let step = run.next_with(FalseBranch).await.expect("override step");
    assert!(step.is_done());

    let result = run.into_result().expect("result");
    assert_eq!(result.output, "f");
}

/// **Scenario**: into_result is None while the run is still pending.
#[tokio::test]
async fn into_result_requires_termination() {
    let graph = Graph::new([Increment::DEF]);
    let mut run = graph
        .iter(Increment, CounterState::default(), None)
        .expect("start node is registered");

    run.next().await.expect("one step");
    assert!(!run.is_done());
    assert!(run.output().is_none());
    assert!(run.into_result().is_none());
}

/// **Scenario**: after termination, further next() calls keep yielding Done
/// without executing anything.
#[tokio::test]
async fn next_after_done_is_stable() {
    let graph = Graph::new([Increment::DEF]);
    let mut run = graph
        .iter(Increment, CounterState::default(), None)
        .expect("start node is registered");

    while !run.next().await.expect("step").is_done() {}
    let executions = run.state().executions.len();

    match run.next().await.expect("post-done step") {
        Step::Done(output) => assert_eq!(*output, 3),
        Step::Next(node) => panic!("unexpected pending node {}", node.def().name()),
    }
    assert_eq!(run.state().executions.len(), executions, "nothing ran");
}

/// **Scenario**: state_mut allows caller intervention between steps.
#[tokio::test]
async fn state_can_be_adjusted_between_steps() {
    let graph = Graph::new([Countdown::DEF, CheckCountdown::DEF]);
    let mut run = graph
        .iter(Countdown, CountdownState::starting_at(10), None)
        .expect("start node is registered");

    run.next().await.expect("first step");
    // Collapse the countdown so the next check terminates.
    run.state_mut().counter = 0;
    let step = run.next().await.expect("check step");
    assert!(step.is_done());
    assert_eq!(run.output(), Some(&0));
}
