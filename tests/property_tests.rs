//! Property tests for the universal invariants in the execution spec:
//! fills stay within the bar's range, the modified bar only ever widens,
//! order ids are monotonic, and a trailing stop's state never loosens.

use proptest::prelude::*;
use rust_decimal::Decimal;

use barsim_exec::{execute, Bar, Order, OrderKind, OrderSide, TrailingAmount};

fn arb_cents() -> impl Strategy<Value = Decimal> {
    (1_000i64..50_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_bar() -> impl Strategy<Value = Bar> {
    (arb_cents(), arb_cents(), arb_cents(), arb_cents()).prop_map(|(a, b, c, d)| {
        let mut prices = [a, b, c, d];
        prices.sort();
        let open = prices[1];
        let close = prices[2];
        Bar::new(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open,
            prices[3],
            prices[0],
            close,
            1_000_000,
        )
        .unwrap()
    })
}

proptest! {
    /// Every fill a market, limit, or stop decider produces lands within
    /// the bar's [low, high] range.
    #[test]
    fn market_fill_within_bar_range(bar in arb_bar()) {
        let order = Order::market(OrderSide::Buy, 10.0);
        let result = execute(order, &bar, None).unwrap();
        for fill in &result.fills {
            prop_assert!(fill.execution.price >= bar.low);
            prop_assert!(fill.execution.price <= bar.high);
        }
    }

    #[test]
    fn limit_fill_within_bar_range(bar in arb_bar(), limit_price in arb_cents(), buy in any::<bool>()) {
        let action = if buy { OrderSide::Buy } else { OrderSide::Sell };
        let order = Order::limit(action, 10.0, limit_price);
        let result = execute(order, &bar, None).unwrap();
        for fill in &result.fills {
            prop_assert!(fill.execution.price >= bar.low);
            prop_assert!(fill.execution.price <= bar.high);
        }
    }

    #[test]
    fn stop_fill_within_bar_range(bar in arb_bar(), stop_price in arb_cents(), buy in any::<bool>()) {
        let action = if buy { OrderSide::Buy } else { OrderSide::Sell };
        let order = Order::stop(action, 10.0, stop_price);
        let result = execute(order, &bar, None).unwrap();
        for fill in &result.fills {
            prop_assert!(fill.execution.price >= bar.low);
            prop_assert!(fill.execution.price <= bar.high);
        }
    }

    /// A filled order with children recurses into a modified bar that
    /// only ever widens the original range and preserves the close.
    #[test]
    fn modified_bar_widens_never_narrows(bar in arb_bar(), stop_price in arb_cents()) {
        let order = Order::stop(OrderSide::Buy, 10.0, stop_price);
        let result = execute(order, &bar, None).unwrap();
        if let Some(parent_fill) = result.fills.first() {
            let modified = bar.with_open(parent_fill.execution.price);
            prop_assert!(modified.high >= bar.high);
            prop_assert!(modified.low <= bar.low);
            prop_assert_eq!(modified.close, bar.close);
        }
    }

    /// Orders constructed in sequence always get strictly increasing ids.
    #[test]
    fn order_ids_are_monotonic(_unit in any::<u8>()) {
        let a = Order::market(OrderSide::Buy, 1.0);
        let b = Order::market(OrderSide::Buy, 1.0);
        prop_assert!(b.id.0 > a.id.0);
    }

    /// A trailing stop's stop price never loosens relative to the
    /// trailing distance, bar after bar.
    #[test]
    fn trailing_stop_ratchets_only_favorably(bars in prop::collection::vec(arb_bar(), 1..6)) {
        let distance = Decimal::new(1000, 2);
        let mut order = Order::trailing_stop_market(OrderSide::Buy, 10.0, TrailingAmount::Distance(distance));
        let mut last_stop: Option<Decimal> = None;
        for bar in bars {
            let result = execute(order, &bar, None).unwrap();
            if let Some(pending) = result.pending_orders.into_iter().next() {
                if let OrderKind::TrailingStopMarket { state: Some(state), .. } = &pending.kind {
                    if let Some(prev) = last_stop {
                        prop_assert!(state.stop_price >= prev);
                    }
                    last_stop = Some(state.stop_price);
                }
                order = pending;
            } else {
                break;
            }
        }
    }
}
