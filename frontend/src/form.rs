use shards_rewards::{LockSizes, RewardResult, USER_COUNT};

use crate::parse::parse_amount;
use crate::types::*;

/// Name of the total supply field.
pub const TOTAL_TOKENS_FIELD: &str = "total_tokens";

/// Field names accepted by [`CalculatorForm::set_field`], in display order.
pub const FIELD_NAMES: [&str; USER_COUNT + 1] = [
    "lock_size_1",
    "lock_size_2",
    "lock_size_3",
    "lock_size_4",
    "lock_size_5",
    TOTAL_TOKENS_FIELD,
];

/// The calculator's input snapshot and whatever it last displayed.
///
/// Edits only update inputs. The outcome changes only on [`calculate`],
/// so a stale result stays visible until the user asks again.
///
/// [`calculate`]: CalculatorForm::calculate
#[derive(Debug, Clone)]
pub struct CalculatorForm {
    lock_sizes: LockSizes,
    total_tokens: f64,
    outcome: Outcome,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::from_scenario(&Scenario::default())
    }
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form pre-filled from a scenario, with nothing calculated.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            lock_sizes: scenario.lock_sizes,
            total_tokens: scenario.total_tokens,
            outcome: Outcome::Empty,
        }
    }

    pub fn to_scenario(&self) -> Scenario {
        Scenario {
            lock_sizes: self.lock_sizes,
            total_tokens: self.total_tokens,
        }
    }

    pub fn lock_sizes(&self) -> &LockSizes {
        &self.lock_sizes
    }

    pub fn total_tokens(&self) -> f64 {
        self.total_tokens
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Current value of a named field.
    pub fn field(&self, name: &str) -> Result<f64> {
        match field_slot(name)? {
            Slot::Lock(i) => Ok(self.lock_sizes[i]),
            Slot::Total => Ok(self.total_tokens),
        }
    }

    /// Update a field from raw user text. Unparseable text becomes `0`.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<f64> {
        let value = parse_amount(raw);
        match field_slot(name)? {
            Slot::Lock(i) => self.lock_sizes[i] = value,
            Slot::Total => self.total_tokens = value,
        }
        tracing::debug!(field = name, raw, value, "form field updated");
        Ok(value)
    }

    /// Run the calculator on the current snapshot.
    ///
    /// A failure replaces any earlier result with the error.
    pub fn calculate(&mut self) -> &Outcome {
        self.outcome = Outcome::from(shards_rewards::compute(
            &self.lock_sizes,
            self.total_tokens,
        ));
        &self.outcome
    }

    /// The last successful result, if the form currently shows one.
    pub fn result(&self) -> Option<&RewardResult> {
        match &self.outcome {
            Outcome::Result(r) => Some(r),
            _ => None,
        }
    }

    /// Restore default inputs and clear the outcome.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

enum Slot {
    Lock(usize),
    Total,
}

fn field_slot(name: &str) -> Result<Slot> {
    if name == TOTAL_TOKENS_FIELD {
        return Ok(Slot::Total);
    }
    name.strip_prefix("lock_size_")
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|n| (1..=USER_COUNT).contains(n))
        .map(|n| Slot::Lock(n - 1))
        .ok_or_else(|| ScenarioError::UnknownField(name.to_string()))
}
