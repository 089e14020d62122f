use tracing::{debug, info};

use crate::balanced::BalancedSolver;
use crate::problem::ProductionProblem;
use crate::saturation::SaturationEvaluator;
use crate::select::OptionSelector;
use crate::solution::{BalancedOption, Evaluation, SingleVariableOption, SolveError};

/// Runs every strategy for a problem and picks the best one
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    /// Relative tolerance for singular pivots
    tolerance: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative tolerance used to detect a singular consumption matrix
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn evaluate(&self, problem: &ProductionProblem) -> Result<Evaluation, SolveError> {
        let evaluator = SaturationEvaluator::new();
        let limits = problem.limits();

        let options = problem
            .profits()
            .iter()
            .zip(problem.consumption())
            .enumerate()
            .map(|(i, (&profit, row))| {
                let option = evaluator.evaluate(i + 1, profit, row, limits)?;
                debug!(
                    variable = option.variable,
                    units = option.units_produced,
                    profit = option.profit,
                    "saturated single variable"
                );
                Ok(option)
            })
            .collect::<Result<Vec<SingleVariableOption>, SolveError>>()?;

        let solution = BalancedSolver::new()
            .with_tolerance(self.tolerance)
            .solve(problem.consumption(), limits)?;
        let profit: f64 = problem
            .profits()
            .iter()
            .zip(&solution.units)
            .map(|(&p, &u)| p * u as f64)
            .sum();
        let balanced = BalancedOption {
            exact: solution.exact,
            units: solution.units,
            profit,
        };
        debug!(units = ?balanced.units, profit = balanced.profit, "solved balanced mix");

        let profits: Vec<f64> = options.iter().map(|o| o.profit).collect();
        let decision = OptionSelector::select(&profits, balanced.profit)?;
        info!(option = %decision.label, profit = decision.profit, "selected option");

        Ok(Evaluation {
            options,
            balanced,
            decision,
        })
    }
}
