//! Order identity.
//!
//! `OrderId` allocation is a process-wide monotonically increasing counter,
//! not an injected allocator — ids only need to be unique for the life of
//! the process, and every `Order` (including children created internally by
//! bracket-style constructors) must get one without threading a generator
//! through every call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderId({})", self.0)
    }
}

static NEXT_ORDER_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate the next process-unique order id.
pub fn next_order_id() -> OrderId {
    OrderId(NEXT_ORDER_ID.fetch_add(1, Ordering::Relaxed))
}

/// Reset the global counter. Test-only: keeps id assertions deterministic
/// across test functions that each expect to start from a known id.
#[cfg(test)]
pub fn reset_order_ids() {
    NEXT_ORDER_ID.store(1, Ordering::Relaxed);
}
