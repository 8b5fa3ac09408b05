//! Recursive order executor (component F).
//!
//! `execute` is the one entry point: it dispatches an order to the decider
//! for its kind (component E, or the trailing state machine, component G),
//! and on a fill recurses into the order's children against a bar whose
//! open has been displaced to the fill price (§4.3's "modified bar").
//! `ExecutionConfig`'s `ambiguity_strategy` and `slippage_model` are not
//! consulted here — see `config` module docs.

pub mod config;
pub mod deciders;
pub mod trailing;

pub use config::{AmbiguityStrategy, ExecutionConfig, SlippageModel};

use crate::domain::{
    Bar, Commission, Execution, ExecutionError, ExecutionResult, Fill, Order, OrderId, OrderKind,
};
use rust_decimal::Decimal;

/// Execute `order` (and, on fill, its children) against `bar`.
///
/// `parent_id` is the id of the order that produced the bar `order` is
/// being executed against — `None` for a top-level call, `Some(parent.id)`
/// when recursing into children.
pub fn execute(
    mut order: Order,
    bar: &Bar,
    parent_id: Option<OrderId>,
) -> Result<ExecutionResult, ExecutionError> {
    let fill_price = try_fill(&mut order, bar)?;

    let mut result = ExecutionResult::default();

    match fill_price {
        Some(price) => {
            log::debug!(
                "order {} filled at {} against bar {}",
                order.id,
                price,
                bar.date
            );
            let execution = Execution {
                order_id: order.id,
                time: bar.date,
                shares: order.total_quantity,
                price,
                side: order.action,
            };
            result.fills.push(Fill {
                order: order.clone(),
                execution,
                commission: Commission::none(),
                time: bar.date,
                parent_id,
            });

            if !order.children.is_empty() {
                let modified = bar.with_open(price);
                let parent_order_id = order.id;
                for child in order.children {
                    let child_result = execute(child, &modified, Some(parent_order_id))?;
                    result.fills.extend(child_result.fills);
                    result.pending_orders.extend(child_result.pending_orders);
                }
            }
        }
        None => {
            log::trace!("order {} did not fill against bar {}", order.id, bar.date);
            result.pending_orders.push(order);
        }
    }

    Ok(result)
}

/// Run the decider for `order`'s kind, mutating trailing-stop state in
/// place. Returns the fill price, if any.
fn try_fill(order: &mut Order, bar: &Bar) -> Result<Option<Decimal>, ExecutionError> {
    match &mut order.kind {
        OrderKind::Market => Ok(Some(deciders::decide_market(bar))),
        OrderKind::Limit { limit_price } => {
            Ok(deciders::decide_limit(order.action, *limit_price, bar))
        }
        OrderKind::Stop { stop_price } => Ok(deciders::decide_stop(order.action, *stop_price, bar)),
        OrderKind::StopLimit { stop_price, .. } => {
            Ok(deciders::decide_stop(order.action, *stop_price, bar))
        }
        OrderKind::TrailingStopMarket { amount, state } => {
            Ok(trailing::decide(order.action, *amount, state, bar))
        }
        OrderKind::TrailingStopLimit { .. } => Err(ExecutionError::InvariantViolation(
            "TrailingStopLimit execution is not implemented",
        )),
    }
}
