//! Run context passed into every node invocation.
//!
//! Carries the run's mutable state and read-only deps. The owning
//! [`GraphRun`](crate::GraphRun) builds one per node invocation from the
//! state it owns, so state identity never changes across steps: nodes mutate
//! the same value in place for the whole run.

/// The state + deps carrier handed to `Node::validate` and `Node::run`.
///
/// `state` is exclusively owned by one run; access is serialized by
/// construction (nodes execute strictly one at a time), so no locking is
/// involved. `deps` is shared and read-only for the run's lifetime.
pub struct RunContext<'r, S, D = ()> {
    /// Mutable run state.
    pub state: &'r mut S,
    /// Read-only external dependencies, if any.
    pub deps: Option<&'r D>,
}

impl<'r, S, D> RunContext<'r, S, D> {
    /// Builds a context over the given state and deps.
    pub fn new(state: &'r mut S, deps: Option<&'r D>) -> Self {
        Self { state, deps }
    }
}
