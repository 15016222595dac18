//! Budget state and its pure operations
//!
//! Every operation takes the current state by reference and hands back a new
//! value, so callers decide when (and whether) the change is committed.

use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryStamp};
use super::ids::EntryId;
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// The budget and every expense recorded against it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetState {
    /// Spending ceiling (finite, non-negative)
    pub budget: f64,

    /// Expense entries, newest first
    pub entries: Vec<Entry>,
}

impl BudgetState {
    /// The canonical empty state
    pub fn reset() -> Self {
        Self {
            budget: 0.0,
            entries: Vec::new(),
        }
    }

    /// Replace the budget
    ///
    /// Only finite values `>= 0` are accepted; anything else leaves the
    /// state untouched and is reported as `InvalidBudget`.
    pub fn set_budget(&self, value: f64) -> BudgetResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(BudgetError::InvalidBudget(value.to_string()));
        }

        Ok(Self {
            budget: value,
            entries: self.entries.clone(),
        })
    }

    /// Record a new expense at the head of the list
    pub fn add_entry(
        &self,
        description: &str,
        amount: f64,
        stamp: EntryStamp,
    ) -> BudgetResult<(Self, Entry)> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BudgetError::InvalidAmount(amount.to_string()));
        }

        let entry = Entry {
            id: stamp.id,
            description: Entry::normalize_description(description),
            amount,
            date: stamp.date,
        };

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry.clone());
        entries.extend(self.entries.iter().cloned());

        Ok((
            Self {
                budget: self.budget,
                entries,
            },
            entry,
        ))
    }

    /// Remove the first entry with the given id
    ///
    /// Unknown ids are not an error; the returned state is simply unchanged.
    pub fn delete_entry(&self, id: EntryId) -> Self {
        let mut entries = self.entries.clone();
        if let Some(pos) = entries.iter().position(|e| e.id == id) {
            entries.remove(pos);
        }

        Self {
            budget: self.budget,
            entries,
        }
    }

    /// Sum of all entry amounts
    pub fn total_expenses(&self) -> f64 {
        self.entries.iter().fold(0.0, |sum, e| sum + e.amount)
    }

    /// Budget minus total expenses; negative when overspent
    pub fn remaining(&self) -> f64 {
        self.budget - self.total_expenses()
    }

    /// Whether expenses exceed the budget by at least a displayed cent
    pub fn is_overspent(&self) -> bool {
        Money::new(self.remaining()).is_negative()
    }

    /// Look up an entry by id
    pub fn find_entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Highest id present, used to seed the id generator after a load
    pub fn max_entry_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|e| e.id).max()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the invariants a state read from outside must satisfy
    pub fn validate(&self) -> BudgetResult<()> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(BudgetError::InvalidBudget(self.budget.to_string()));
        }
        for entry in &self.entries {
            if !entry.amount.is_finite() || entry.amount <= 0.0 {
                return Err(BudgetError::InvalidAmount(format!(
                    "entry {} has amount {}",
                    entry.id, entry.amount
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(id: i64) -> EntryStamp {
        EntryStamp::new(EntryId::new(id), "1/1/2025")
    }

    fn sample() -> BudgetState {
        let state = BudgetState::reset().set_budget(500.0).unwrap();
        let (state, _) = state.add_entry("Coffee", 4.50, stamp(1)).unwrap();
        let (state, _) = state.add_entry("Lunch", 12.00, stamp(2)).unwrap();
        state
    }

    #[test]
    fn test_coffee_and_lunch_scenario() {
        let state = sample();
        assert_eq!(state.remaining(), 483.50);
        let names: Vec<_> = state.entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Lunch", "Coffee"]);
    }

    #[test]
    fn test_add_grows_by_one_and_reduces_remaining() {
        let before = sample();
        for (i, amount) in [0.25, 1.0, 99.5, 1_000_000.0].into_iter().enumerate() {
            let (after, entry) = before.add_entry("x", amount, stamp(10 + i as i64)).unwrap();
            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(after.remaining(), before.remaining() - amount);
            assert_eq!(after.entries[0], entry);
        }
    }

    #[test]
    fn test_blank_description_becomes_default() {
        let (state, entry) = BudgetState::reset().add_entry("", 10.0, stamp(1)).unwrap();
        assert_eq!(entry.description, "Expense");
        assert_eq!(state.entries[0].description, "Expense");
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        let state = sample();
        for amount in [-5.0, 0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = state.add_entry("X", amount, stamp(99)).unwrap_err();
            assert!(matches!(err, BudgetError::InvalidAmount(_)));
        }
        assert_eq!(state, sample());
    }

    #[test]
    fn test_set_budget_validation() {
        let state = sample();
        assert!(matches!(
            state.set_budget(-1.0),
            Err(BudgetError::InvalidBudget(_))
        ));
        assert!(state.set_budget(f64::NAN).is_err());
        assert_eq!(state.set_budget(0.0).unwrap().budget, 0.0);
        let updated = state.set_budget(1e12).unwrap();
        assert_eq!(updated.budget, 1e12);
        assert_eq!(updated.entries, state.entries);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let state = sample();
        let once = state.delete_entry(EntryId::new(1));
        let twice = once.delete_entry(EntryId::new(1));
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(once.remaining(), 488.0);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let state = sample();
        assert_eq!(state.delete_entry(EntryId::new(12345)), state);
    }

    #[test]
    fn test_reset_is_empty() {
        let reset = BudgetState::reset();
        assert_eq!(reset.budget, 0.0);
        assert!(reset.entries.is_empty());
        assert_eq!(reset, BudgetState::default());
    }

    #[test]
    fn test_overspent() {
        let state = BudgetState::reset().set_budget(10.0).unwrap();
        let (state, _) = state.add_entry("Dinner", 25.0, stamp(1)).unwrap();
        assert_eq!(state.remaining(), -15.0);
        assert!(state.is_overspent());
        assert_eq!(state.total_expenses(), 25.0);
    }

    #[test]
    fn test_sub_cent_shortfall_is_not_overspent() {
        let state = BudgetState::reset().set_budget(10.0).unwrap();
        let (state, _) = state.add_entry("Gum", 10.004, stamp(1)).unwrap();
        assert!(state.remaining() < 0.0);
        assert!(!state.is_overspent());
    }

    #[test]
    fn test_find_and_max_id() {
        let state = sample();
        assert_eq!(state.find_entry(EntryId::new(1)).unwrap().description, "Coffee");
        assert!(state.find_entry(EntryId::new(3)).is_none());
        assert_eq!(state.max_entry_id(), Some(EntryId::new(2)));
        assert_eq!(BudgetState::reset().max_entry_id(), None);
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());
        let mut bad = sample();
        bad.entries[0].amount = -1.0;
        assert!(bad.validate().is_err());
        let mut bad_budget = sample();
        bad_budget.budget = -3.0;
        assert!(bad_budget.validate().is_err());
    }
}
