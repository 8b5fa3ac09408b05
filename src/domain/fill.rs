//! Fill — the record of one order execution.

use super::ids::OrderId;
use super::order::{Order, OrderSide};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The execution half of a fill: what happened, independent of cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub order_id: OrderId,
    pub time: NaiveDate,
    pub shares: f64,
    pub price: Decimal,
    pub side: OrderSide,
}

/// Commission is a placeholder — always zero. Real commission modeling is
/// out of scope; the field exists so `Fill`'s shape matches the broker
/// report it is modeled on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub amount: Decimal,
    pub currency: &'static str,
}

impl Commission {
    pub fn none() -> Commission {
        Commission {
            amount: Decimal::ZERO,
            currency: "USD",
        }
    }
}

/// A completed (possibly child) order execution, with a back-reference to
/// the order that filled and to its parent in the order tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub order: Order,
    pub execution: Execution,
    pub commission: Commission,
    pub time: NaiveDate,
    pub parent_id: Option<OrderId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn commission_placeholder_is_zero() {
        let c = Commission::none();
        assert_eq!(c.amount, Decimal::ZERO);
    }

    #[test]
    fn fill_carries_parent_id_of_child_order() {
        let parent = Order::stop(OrderSide::Buy, 100.0, dec!(151));
        let child = parent.children[0].clone();
        let fill = Fill {
            order: child,
            execution: Execution {
                order_id: parent.children[0].id,
                time: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                shares: 100.0,
                price: dec!(151),
                side: OrderSide::Buy,
            },
            commission: Commission::none(),
            time: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            parent_id: Some(parent.id),
        };
        assert_eq!(fill.parent_id, Some(parent.id));
    }
}
