//! Trailing-stop state machine (component G): the fragment walk.
//!
//! A trailing stop carries (extremePrice, stopPrice) across bars. Within a
//! bar, the four OHLC prices are visited in an assumed intra-bar order and
//! the state ratchets toward the favorable direction until either the walk
//! triggers a fill or completes without one, in which case the order is
//! pended with its new state intact for the next bar.

use crate::domain::{Bar, OrderSide, TrailingAmount, TrailingState};
use rust_decimal::Decimal;

/// Intra-bar path assumption: bullish bars are read open → low → high →
/// close, bearish (or flat) bars open → high → low → close.
fn fragments(bar: &Bar) -> [Decimal; 4] {
    if bar.close > bar.open {
        [bar.open, bar.low, bar.high, bar.close]
    } else {
        [bar.open, bar.high, bar.low, bar.close]
    }
}

/// Walk the bar's fragments against the carried (or freshly initialized)
/// state, mutating `state` in place. Returns the fill price if the stop
/// triggers during this bar.
pub fn decide(
    action: OrderSide,
    amount: TrailingAmount,
    state: &mut Option<TrailingState>,
    bar: &Bar,
) -> Option<Decimal> {
    let mut prev: Option<Decimal> = None;

    for price in fragments(bar) {
        if state.is_none() {
            *state = Some(TrailingState::init(action, price, amount));
        }
        let current = state.as_mut().expect("just initialized above");

        let triggered = match action {
            OrderSide::Buy => {
                if price <= current.extreme_price {
                    *current = TrailingState::init(action, price, amount);
                    false
                } else {
                    price >= current.stop_price
                }
            }
            OrderSide::Sell => {
                if price >= current.extreme_price {
                    *current = TrailingState::init(action, price, amount);
                    false
                } else {
                    price <= current.stop_price
                }
            }
        };

        if triggered {
            let stop_price = state.expect("triggered implies initialized").stop_price;
            let crossed_unambiguously = match action {
                OrderSide::Buy => prev.is_some_and(|pv| pv < stop_price),
                OrderSide::Sell => prev.is_some_and(|pv| pv > stop_price),
            };
            return Some(if crossed_unambiguously { stop_price } else { price });
        }

        prev = Some(price);
    }

    None
}
