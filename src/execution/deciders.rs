//! Per-type fill-price deciders (component E).
//!
//! Each decider looks at one order's price parameters and one bar and
//! returns at most one fill price. None of them recurse or know about
//! children — that is `execution::execute`'s job.

use crate::domain::{Bar, OrderSide};
use rust_decimal::Decimal;

/// Market orders always fill at the bar's open.
pub fn decide_market(bar: &Bar) -> Decimal {
    bar.open
}

/// Buy: fills if the bar dips to or below `limit_price`, at the better of
/// open and limit. Sell is the mirror image.
pub fn decide_limit(action: OrderSide, limit_price: Decimal, bar: &Bar) -> Option<Decimal> {
    match action {
        OrderSide::Buy => (bar.low <= limit_price).then(|| bar.open.min(limit_price)),
        OrderSide::Sell => (bar.high >= limit_price).then(|| bar.open.max(limit_price)),
    }
}

/// Buy: triggers if the bar reaches `stop_price` from below, filling at the
/// stop unless the bar gapped past it (then fills at open). Sell mirrors.
pub fn decide_stop(action: OrderSide, stop_price: Decimal, bar: &Bar) -> Option<Decimal> {
    match action {
        OrderSide::Buy => (bar.high >= stop_price).then(|| bar.open.max(stop_price)),
        OrderSide::Sell => (bar.low <= stop_price).then(|| bar.open.min(stop_price)),
    }
}
