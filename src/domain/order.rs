//! Order model: the five tagged variants and their fixed parent→child shape.

use super::ids::{next_order_id, OrderId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised constructing an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("trailing stop limit offset must be positive, got {0}")]
    InvalidLimitOffset(Decimal),
}

/// Buy or sell. Also governs rounding/ratchet direction for trailing stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

/// A trailing stop trails by an absolute distance or a percentage of the
/// extreme price — never both, by construction (a sum type makes the
/// "neither or both set" invalid state described for the source's
/// `TrailingOrder` model unrepresentable).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrailingAmount {
    Distance(Decimal),
    Percent(Decimal),
}

/// Mutable trailing-stop state: the best price seen and the current trigger.
/// Ratchets monotonically toward the favorable direction; never loosens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingState {
    pub extreme_price: Decimal,
    pub stop_price: Decimal,
}

impl TrailingState {
    pub(crate) fn init(side: OrderSide, extreme_price: Decimal, amount: TrailingAmount) -> Self {
        let stop_price = match (side, amount) {
            (OrderSide::Buy, TrailingAmount::Distance(d)) => extreme_price + d,
            (OrderSide::Buy, TrailingAmount::Percent(p)) => {
                extreme_price * (Decimal::ONE + p / dec!(100))
            }
            (OrderSide::Sell, TrailingAmount::Distance(d)) => extreme_price - d,
            (OrderSide::Sell, TrailingAmount::Percent(p)) => {
                extreme_price * (Decimal::ONE - p / dec!(100))
            }
        };
        TrailingState {
            extreme_price,
            stop_price,
        }
    }
}

/// What kind of order this is and the price parameters that go with it.
///
/// Matches spec.md's five-variant table structurally instead of a shared
/// base struct with a string discriminator: there is no "unknown variant"
/// reaching the dispatcher because the match in `execution::execute` is
/// exhaustive over this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderKind {
    Market,
    Limit {
        limit_price: Decimal,
    },
    Stop {
        stop_price: Decimal,
    },
    StopLimit {
        stop_price: Decimal,
        limit_price: Decimal,
    },
    TrailingStopMarket {
        amount: TrailingAmount,
        state: Option<TrailingState>,
    },
    TrailingStopLimit {
        amount: TrailingAmount,
        limit_offset: Decimal,
        state: Option<TrailingState>,
    },
}

/// An order: one of the five kinds above, plus the fields every order
/// carries — an auto-assigned id, the side, quantity, optional parent, and
/// a fixed (not user-extensible) child list built by the constructors
/// below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub action: OrderSide,
    pub total_quantity: f64,
    pub kind: OrderKind,
    pub parent_id: Option<OrderId>,
    pub children: Vec<Order>,
}

fn leaf(action: OrderSide, total_quantity: f64, kind: OrderKind) -> Order {
    Order {
        id: next_order_id(),
        action,
        total_quantity,
        kind,
        parent_id: None,
        children: Vec::new(),
    }
}

fn attach_child(parent: &mut Order, mut child: Order) {
    child.parent_id = Some(parent.id);
    parent.children.push(child);
}

impl Order {
    pub fn market(action: OrderSide, total_quantity: f64) -> Order {
        leaf(action, total_quantity, OrderKind::Market)
    }

    pub fn limit(action: OrderSide, total_quantity: f64, limit_price: Decimal) -> Order {
        leaf(action, total_quantity, OrderKind::Limit { limit_price })
    }

    /// Stop order: one Market child with the same action/quantity.
    pub fn stop(action: OrderSide, total_quantity: f64, stop_price: Decimal) -> Order {
        let mut parent = leaf(action, total_quantity, OrderKind::Stop { stop_price });
        attach_child(&mut parent, Order::market(action, total_quantity));
        parent
    }

    /// Stop-limit order: one Limit child priced at `limit_price`.
    pub fn stop_limit(
        action: OrderSide,
        total_quantity: f64,
        stop_price: Decimal,
        limit_price: Decimal,
    ) -> Order {
        let mut parent = leaf(
            action,
            total_quantity,
            OrderKind::StopLimit {
                stop_price,
                limit_price,
            },
        );
        attach_child(&mut parent, Order::limit(action, total_quantity, limit_price));
        parent
    }

    /// Trailing stop, market exit. One Market child.
    pub fn trailing_stop_market(
        action: OrderSide,
        total_quantity: f64,
        amount: TrailingAmount,
    ) -> Order {
        let mut parent = leaf(
            action,
            total_quantity,
            OrderKind::TrailingStopMarket {
                amount,
                state: None,
            },
        );
        attach_child(&mut parent, Order::market(action, total_quantity));
        parent
    }

    /// Trailing stop, limit exit. One Limit child; its price is a
    /// placeholder until the stop triggers (unimplemented — see
    /// `execution::execute`, which errors rather than dispatch through it).
    pub fn trailing_stop_limit(
        action: OrderSide,
        total_quantity: f64,
        limit_offset: Decimal,
        amount: TrailingAmount,
    ) -> Result<Order, OrderError> {
        if limit_offset <= Decimal::ZERO {
            return Err(OrderError::InvalidLimitOffset(limit_offset));
        }
        let mut parent = leaf(
            action,
            total_quantity,
            OrderKind::TrailingStopLimit {
                amount,
                limit_offset,
                state: None,
            },
        );
        attach_child(&mut parent, Order::limit(action, total_quantity, Decimal::ZERO));
        Ok(parent)
    }
}
