use std::fmt;

use thiserror::Error;

/// A validated production planning problem.
///
/// Row `k` of the consumption matrix holds how much of each resource one unit
/// of variable `k + 1` consumes. The matrix is always square: there are as many
/// resources as variables.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionProblem {
    profits: Vec<f64>,
    consumption: Vec<Vec<f64>>,
    limits: Vec<f64>,
}

/// Location of a single input value, used in validation diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// Profit per unit of a variable (1-based)
    Profit { variable: usize },
    /// Consumption of a resource by a variable (both 1-based)
    Consumption { variable: usize, resource: usize },
    /// Limit of a resource (1-based)
    Limit { resource: usize },
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Profit { variable } => write!(f, "profit of variable {}", variable),
            InputField::Consumption { variable, resource } => {
                write!(f, "consumption of resource {} by variable {}", resource, variable)
            }
            InputField::Limit { resource } => write!(f, "limit of resource {}", resource),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Problem has no variables")]
    NoVariables,
    #[error("Expected {expected} consumption rows (one per variable), found {found}")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("Consumption row of variable {variable} has {found} entries, expected {expected}")]
    NotSquare {
        variable: usize,
        expected: usize,
        found: usize,
    },
    #[error("Expected {expected} resource limits, found {found}")]
    LimitCountMismatch { expected: usize, found: usize },
    #[error("Negative value {value} for {field}")]
    Negative { field: InputField, value: f64 },
    #[error("Non-finite value {value} for {field}")]
    NotFinite { field: InputField, value: f64 },
}

impl ProductionProblem {
    /// Validate raw input and build a problem.
    ///
    /// The variable count is taken from `profits`; the matrix must be
    /// `n x n` and there must be `n` limits.
    pub fn new(
        profits: Vec<f64>,
        consumption: Vec<Vec<f64>>,
        limits: Vec<f64>,
    ) -> Result<Self, ValidationError> {
        let n = profits.len();
        if n == 0 {
            return Err(ValidationError::NoVariables);
        }
        if consumption.len() != n {
            return Err(ValidationError::RowCountMismatch {
                expected: n,
                found: consumption.len(),
            });
        }
        for (i, row) in consumption.iter().enumerate() {
            if row.len() != n {
                return Err(ValidationError::NotSquare {
                    variable: i + 1,
                    expected: n,
                    found: row.len(),
                });
            }
        }
        check_limits(&limits, n)?;

        for (i, &value) in profits.iter().enumerate() {
            check_value(InputField::Profit { variable: i + 1 }, value)?;
        }
        for (i, row) in consumption.iter().enumerate() {
            check_row(i + 1, row)?;
        }

        Ok(Self {
            profits,
            consumption,
            limits,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.profits.len()
    }

    pub fn profits(&self) -> &[f64] {
        &self.profits
    }

    /// Consumption matrix, rows = variables, columns = resources
    pub fn consumption(&self) -> &[Vec<f64>] {
        &self.consumption
    }

    pub fn limits(&self) -> &[f64] {
        &self.limits
    }
}

/// Check that `limits` has one non-negative finite entry per resource.
pub(crate) fn check_limits(limits: &[f64], resources: usize) -> Result<(), ValidationError> {
    if limits.len() != resources {
        return Err(ValidationError::LimitCountMismatch {
            expected: resources,
            found: limits.len(),
        });
    }
    for (j, &value) in limits.iter().enumerate() {
        check_value(InputField::Limit { resource: j + 1 }, value)?;
    }
    Ok(())
}

/// Check that every consumption entry of `variable` (1-based) is non-negative
/// and finite.
pub(crate) fn check_row(variable: usize, row: &[f64]) -> Result<(), ValidationError> {
    for (j, &value) in row.iter().enumerate() {
        check_value(
            InputField::Consumption {
                variable,
                resource: j + 1,
            },
            value,
        )?;
    }
    Ok(())
}

/// Check a single input value is non-negative and finite.
pub(crate) fn check_value(field: InputField, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}
