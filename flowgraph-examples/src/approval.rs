//! Approval workflow: submit a request, branch on a policy held in deps.
//!
//! `Submit` hands off to a `Conditional` that compares the request amount
//! against the policy's auto-approve limit; `Approve` and `Reject` terminate
//! with a human-readable outcome.

use async_trait::async_trait;
use serde::Serialize;

use flowgraph::{Conditional, Edge, Graph, Next, Node, NodeDef, NodeError, RunContext};

/// State threaded through an approval run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Request {
    pub amount: i64,
    pub approved: Option<bool>,
}

impl Request {
    pub fn for_amount(amount: i64) -> Self {
        Self {
            amount,
            approved: None,
        }
    }
}

/// Read-only policy shared by every run using the same deps handle.
#[derive(Debug, Clone)]
pub struct Policy {
    pub auto_approve_limit: i64,
}

/// Entry node: records submission and hands off to the decision.
pub struct Submit;

impl Submit {
    pub const DEF: NodeDef = NodeDef::new("Submit", &[Edge::Node("Decide")]);
}

#[async_trait]
impl Node<Request, Policy, String> for Submit {
    fn def(&self) -> NodeDef {
        Self::DEF
    }

    async fn run(
        &self,
        _ctx: &mut RunContext<'_, Request, Policy>,
    ) -> Result<Next<Request, Policy, String>, NodeError> {
        Ok(Next::node(decide()))
    }
}

/// Descriptor for the decision step, registered alongside the node types.
pub const DECIDE: NodeDef = NodeDef::new("Decide", &[Edge::Node("Approve"), Edge::Node("Reject")]);

/// Builds the decision node: auto-approve under the policy limit.
pub fn decide() -> Conditional<Request, Policy, String> {
    Conditional::new(
        DECIDE,
        |ctx: &RunContext<'_, Request, Policy>| {
            ctx.deps
                .map_or(false, |policy| ctx.state.amount <= policy.auto_approve_limit)
        },
        || Next::node(Approve),
        || Next::node(Reject),
    )
}

/// Terminal node for requests within the limit.
pub struct Approve;

impl Approve {
    pub const DEF: NodeDef = NodeDef::new("Approve", &[Edge::End]);
}

#[async_trait]
impl Node<Request, Policy, String> for Approve {
    fn def(&self) -> NodeDef {
        Self::DEF
    }

    async fn run(
        &self,
        ctx: &mut RunContext<'_, Request, Policy>,
    ) -> Result<Next<Request, Policy, String>, NodeError> {
        ctx.state.approved = Some(true);
        Ok(Next::end(format!("approved: {}", ctx.state.amount)))
    }
}

/// Terminal node for requests over the limit.
pub struct Reject;

impl Reject {
    pub const DEF: NodeDef = NodeDef::new("Reject", &[Edge::End]);
}

#[async_trait]
impl Node<Request, Policy, String> for Reject {
    fn def(&self) -> NodeDef {
        Self::DEF
    }

    async fn run(
        &self,
        ctx: &mut RunContext<'_, Request, Policy>,
    ) -> Result<Next<Request, Policy, String>, NodeError> {
        ctx.state.approved = Some(false);
        Ok(Next::end(format!(
            "rejected: {} needs manual review",
            ctx.state.amount
        )))
    }
}

/// Builds the approval graph.
pub fn approval_graph() -> Graph<Request, Policy, String> {
    Graph::new([Submit::DEF, DECIDE, Approve::DEF, Reject::DEF]).with_name("approval")
}
