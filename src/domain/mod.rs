//! Domain types: bars, orders, fills, and execution results.

pub mod bar;
pub mod execution_result;
pub mod fill;
pub mod ids;
pub mod order;

pub use bar::{Bar, BarError};
pub use execution_result::{ExecutionError, ExecutionResult, Status};
pub use fill::{Commission, Execution, Fill};
pub use ids::OrderId;
pub use order::{Order, OrderError, OrderKind, OrderSide, TrailingAmount, TrailingState};
