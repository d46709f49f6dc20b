//! Library behind the `flowgraph` binary: the demo workflow plus the
//! operations the subcommands expose. The binary stays a thin argument
//! parser over these.

pub mod workflows;

use flowgraph::{GraphError, GraphRunResult};

use workflows::{Countdown, CountdownState};

/// Transitions taken plus the final result of one countdown run.
#[derive(Debug)]
pub struct CountdownReport {
    /// Node names in execution order.
    pub transitions: Vec<&'static str>,
    /// The completed run's output and final state.
    pub result: GraphRunResult<CountdownState, i64>,
}

/// Runs the countdown workflow step by step, collecting every transition.
///
/// # Errors
///
/// Any [`GraphError`] the run surfaces; all fatal.
pub async fn run_countdown(from: i64) -> Result<CountdownReport, GraphError> {
    let graph = workflows::countdown_graph();
    let mut run = graph.iter(Countdown, CountdownState::starting_at(from), None)?;

    let mut transitions = vec![Countdown::DEF.name()];
    loop {
        match run.next().await?.node_name() {
            Some(name) => transitions.push(name),
            None => break,
        }
    }

    let result = run.into_result().expect("terminated run has a result");
    Ok(CountdownReport {
        transitions,
        result,
    })
}

#[cfg(test)]
mod tests;
