use crate::solution::{Decision, OptionLabel, SolveError};

/// Picks the most profitable option
pub struct OptionSelector;

impl OptionSelector {
    /// Candidates are the single-variable profits in order, then the balanced
    /// profit. Only a strictly positive profit qualifies, and the earliest
    /// candidate wins a tie, so the balanced mix loses ties.
    pub fn select(single_variable_profits: &[f64], balanced_profit: f64) -> Result<Decision, SolveError> {
        let candidates = single_variable_profits
            .iter()
            .enumerate()
            .map(|(i, &profit)| (OptionLabel::Variable(i + 1), profit))
            .chain(std::iter::once((OptionLabel::Balanced, balanced_profit)));

        let mut best: Option<Decision> = None;
        let mut best_profit = 0.0;
        for (label, profit) in candidates {
            if profit > best_profit {
                best_profit = profit;
                best = Some(Decision { label, profit });
            }
        }

        best.ok_or(SolveError::NoProfitableOption)
    }
}
