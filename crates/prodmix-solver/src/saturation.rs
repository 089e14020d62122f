use crate::numeric::floor_units;
use crate::problem::{InputField, check_limits, check_row, check_value};
use crate::solution::{SingleVariableOption, SolveError};

/// Computes how much of a single variable can be produced on its own
#[derive(Debug, Clone, Copy, Default)]
pub struct SaturationEvaluator;

impl SaturationEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Produce `variable` (1-based) until its tightest resource is exhausted.
    ///
    /// Resources the variable does not consume place no bound on it. If it
    /// consumes nothing at all, production is unbounded and this fails with
    /// [`SolveError::UnboundedProduction`]. A bound too large to count is
    /// capped at `u64::MAX` units.
    pub fn evaluate(
        &self,
        variable: usize,
        profit_per_unit: f64,
        consumption_row: &[f64],
        resource_limits: &[f64],
    ) -> Result<SingleVariableOption, SolveError> {
        check_row(variable, consumption_row)?;
        check_limits(resource_limits, consumption_row.len())?;
        check_value(InputField::Profit { variable }, profit_per_unit)?;

        if consumption_row.iter().all(|&usage| usage == 0.0) {
            return Err(SolveError::UnboundedProduction { variable });
        }

        // A tiny usage can overflow the ratio to infinity
        let bound = consumption_row
            .iter()
            .zip(resource_limits)
            .filter(|&(&usage, _)| usage != 0.0)
            .map(|(&usage, &limit)| limit / usage)
            .fold(f64::INFINITY, f64::min)
            .min(u64::MAX as f64);

        let units_produced = floor_units(bound) as u64;
        Ok(SingleVariableOption {
            variable,
            units_produced,
            profit: profit_per_unit * units_produced as f64,
        })
    }
}
