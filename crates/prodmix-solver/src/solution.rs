use std::fmt;

use thiserror::Error;

use crate::problem::ValidationError;

/// Why an evaluation could not produce a recommendation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Production of variable {variable} is unbounded: it consumes none of any resource")]
    UnboundedProduction { variable: usize },
    #[error(
        "No unique balanced solution: the consumption matrix is singular (pivot {pivot:e} is at or below threshold {threshold:e})"
    )]
    NoUniqueBalancedSolution { pivot: f64, threshold: f64 },
    #[error("No profitable option: every strategy yields a profit of zero or less")]
    NoProfitableOption,
}

/// Producing a single variable until its tightest resource runs out
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SingleVariableOption {
    /// Variable index (1-based)
    pub variable: usize,
    /// Whole units that fit within every resource limit
    pub units_produced: u64,
    /// Profit per unit times units produced
    pub profit: f64,
}

/// The mix that exhausts every resource at once
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BalancedOption {
    /// Exact solution of the linear system, one entry per variable
    pub exact: Vec<f64>,
    /// Floored unit counts; negative if the exact solution is
    pub units: Vec<i64>,
    /// Total profit of the floored mix
    pub profit: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLabel {
    /// Single-variable option (1-based)
    Variable(usize),
    Balanced,
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionLabel::Variable(k) => write!(f, "VARIABLE {}", k),
            OptionLabel::Balanced => f.write_str("BALANCED"),
        }
    }
}

/// The most profitable option
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub label: OptionLabel,
    pub profit: f64,
}

/// Everything computed for one problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One option per variable, in variable order
    pub options: Vec<SingleVariableOption>,
    pub balanced: BalancedOption,
    pub decision: Decision,
}
