//! Budget / remaining summary

use crate::models::{BudgetState, Money};

/// Labels for the balance header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceView {
    /// The budget, e.g. `$500.00`
    pub budget: String,
    /// Total spent, e.g. `$16.50`
    pub spent: String,
    /// Remaining balance, e.g. `$483.50` or `-$12.00`
    pub remaining: String,
    /// Drawn as a warning when true
    pub overspent: bool,
}

impl BalanceView {
    /// Compute the labels for a state
    pub fn from_state(state: &BudgetState, symbol: &str) -> Self {
        let remaining = Money::new(state.remaining());
        Self {
            budget: Money::new(state.budget).format_with_symbol(symbol),
            spent: Money::new(state.total_expenses()).format_with_symbol(symbol),
            remaining: remaining.format_with_symbol(symbol),
            overspent: state.is_overspent(),
        }
    }
}

/// Plain-text summary used by the CLI
pub fn format_balance(view: &BalanceView) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget:    {:>12}\n", view.budget));
    output.push_str(&format!("Spent:     {:>12}\n", view.spent));
    output.push_str(&format!("Remaining: {:>12}", view.remaining));
    if view.overspent {
        output.push_str("  (over budget)");
    }
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, EntryStamp};

    #[test]
    fn test_balance_labels() {
        let state = BudgetState::reset().set_budget(500.0).unwrap();
        let (state, _) = state
            .add_entry("Coffee", 4.5, EntryStamp::new(EntryId::new(1), "d"))
            .unwrap();
        let (state, _) = state
            .add_entry("Lunch", 12.0, EntryStamp::new(EntryId::new(2), "d"))
            .unwrap();

        let view = BalanceView::from_state(&state, "$");
        assert_eq!(view.budget, "$500.00");
        assert_eq!(view.spent, "$16.50");
        assert_eq!(view.remaining, "$483.50");
        assert!(!view.overspent);
    }

    #[test]
    fn test_overspent_balance() {
        let (state, _) = BudgetState::reset()
            .add_entry("Rent", 900.0, EntryStamp::new(EntryId::new(1), "d"))
            .unwrap();
        let view = BalanceView::from_state(&state, "$");
        assert_eq!(view.remaining, "-$900.00");
        assert!(view.overspent);
        assert!(format_balance(&view).contains("over budget"));
    }

    #[test]
    fn test_sub_cent_shortfall_matches_label() {
        let state = BudgetState::reset().set_budget(10.0).unwrap();
        let (state, _) = state
            .add_entry("Gum", 10.004, EntryStamp::new(EntryId::new(1), "d"))
            .unwrap();
        let view = BalanceView::from_state(&state, "$");
        assert_eq!(view.remaining, "$0.00");
        assert_eq!(view.overspent, state.is_overspent());
        assert!(!view.overspent);
    }
}
