//! Execution configuration. Most of this is accepted but not yet wired —
//! see the module doc on `execute` for which knobs actually affect output.

use serde::{Deserialize, Serialize};

/// How to resolve multiple orders competing for the same bar. Out-of-scope
/// policy stub: `execute` considers exactly one order at a time, so this
/// field round-trips through `ExecutionConfig` without being consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbiguityStrategy {
    Skip,
    ExecuteAll,
    Postpone,
    Randomize,
}

/// Slippage applied on top of a decider's raw fill price.
///
/// Only `None` is wired into `execute` — it's a no-op. `Normal` is
/// constructed and stored but never consulted; the biased normal
/// distribution this would need is not yet specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlippageModel {
    None,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    pub ambiguity_strategy: AmbiguityStrategy,
    pub slippage_model: SlippageModel,
    /// Price range / std_divider = std for the (currently unimplemented)
    /// normal slippage model.
    pub std_divider: u32,
    pub random_seed: Option<u64>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        ExecutionConfig {
            ambiguity_strategy: AmbiguityStrategy::Skip,
            slippage_model: SlippageModel::None,
            std_divider: 1000,
            random_seed: None,
        }
    }
}
