//! Countdown state for flow keys and flow values.

use std::collections::BTreeMap;

use tracing::trace;

/// Remaining lifetime of a flow, counted in consumed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Unbounded,
    Lines(usize),
}

impl Budget {
    /// Charge one consumed line. Returns `false` once the budget is spent.
    fn tick(&mut self) -> bool {
        match self {
            Budget::Unbounded => true,
            Budget::Lines(n) => {
                *n = n.saturating_sub(1);
                *n > 0
            }
        }
    }
}

/// Parse the count in front of a `|` marker. Empty and `-1` mean unbounded;
/// other negative or non-integer counts are rejected.
pub fn parse_count(count: &str) -> Option<Budget> {
    if count.is_empty() {
        return Some(Budget::Unbounded);
    }
    match count.parse::<i64>().ok()? {
        -1 => Some(Budget::Unbounded),
        n => usize::try_from(n).ok().map(Budget::Lines),
    }
}

/// Split `count|literal` at the first `|`.
pub fn split_flow(field: &str) -> Option<(&str, &str)> {
    field.split_once('|')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSlot {
    pub value: String,
    pub budget: Budget,
}

impl FlowSlot {
    pub fn new(value: impl Into<String>, budget: Budget) -> Self {
        Self {
            value: value.into(),
            budget,
        }
    }
}

/// The flow key slot plus one slot per value column.
///
/// A slot is present only while its budget is unspent and nothing has
/// cleared it.
#[derive(Debug, Clone, Default)]
pub struct FlowState {
    pub key: Option<FlowSlot>,
    pub values: BTreeMap<usize, FlowSlot>,
}

impl FlowState {
    /// Charge every active slot for the line about to be resolved, dropping
    /// the ones that run out.
    pub fn tick(&mut self) {
        let key_spent = self.key.as_mut().is_some_and(|slot| !slot.budget.tick());
        if key_spent {
            if let Some(slot) = self.key.take() {
                trace!(key = %slot.value, "flow key expired");
            }
        }
        self.values.retain(|column, slot| {
            let alive = slot.budget.tick();
            if !alive {
                trace!(column, value = %slot.value, "flow value expired");
            }
            alive
        });
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.values.is_empty()
    }
}
