//! Deterministic order execution simulator for OHLCV backtesting.
//!
//! Given one order and one price bar, decides whether/where/how the order
//! fills, including recursive parent→child propagation through a bar whose
//! open has been displaced to the parent's fill price, and the stateful
//! trailing-stop fragment walk. See [`execution::execute`] for the entry
//! point and [`domain`] for the data model.

pub mod domain;
pub mod execution;

pub use domain::{
    Bar, BarError, Commission, Execution, ExecutionError, ExecutionResult, Fill, Order,
    OrderError, OrderId, OrderKind, OrderSide, Status, TrailingAmount, TrailingState,
};
pub use execution::{execute, AmbiguityStrategy, ExecutionConfig, SlippageModel};
