//! ExecutionResult — the ⟨fills, pending-orders⟩ pair `execute` returns.

use super::fill::Fill;
use super::order::Order;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised while executing an order or deriving a result's status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An order variant the dispatcher has no decider for. Unreachable
    /// through the public constructors today — `OrderKind`'s match in
    /// `execution::execute` is exhaustive — kept for the documented error
    /// taxonomy and for future variants.
    #[error("order kind {0} is not supported by the execution dispatcher")]
    UnsupportedOrderType(&'static str),
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Derived status of an [`ExecutionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pending,
    Filled,
    Partial,
}

/// Result of executing one order (and, recursively, its children) against
/// one bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub fills: Vec<Fill>,
    pub pending_orders: Vec<Order>,
}

impl ExecutionResult {
    /// Derive the overall status. An empty result (no fills, nothing
    /// pending) can't legitimately arise from `execute` — every order that
    /// doesn't fill is pended — so it is reported as an error rather than
    /// guessed at.
    pub fn status(&self) -> Result<Status, ExecutionError> {
        match (self.fills.is_empty(), self.pending_orders.is_empty()) {
            (true, true) => Err(ExecutionError::InvariantViolation(
                "ExecutionResult has no fills and no pending orders",
            )),
            (true, false) => Ok(Status::Pending),
            (false, true) => Ok(Status::Filled),
            (false, false) => Ok(Status::Partial),
        }
    }
}
