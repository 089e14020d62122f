//! Turning the four free-text answers of a planner into a validated problem.

use prodmix_solver::{ProductionProblem, ValidationError};
use thiserror::Error;
use tracing::debug;

use crate::parser::{ParseError, Parser};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid {field}: {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Raw text for each part of a problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemText {
    /// Number of variables, e.g. `"3"`
    pub variables: String,
    /// Profit per unit of each variable, e.g. `"3000 2000 3000"`
    pub profits: String,
    /// One consumption row per variable, e.g. `"2 1 8,4 2 0,5 4 3"`
    pub matrix: String,
    /// Limit of each resource, e.g. `"300 200 300"`
    pub limits: String,
}

impl ProblemText {
    pub fn parse(&self) -> Result<ProductionProblem, InputError> {
        parse_problem(&self.variables, &self.profits, &self.matrix, &self.limits)
    }
}

/// Parse and validate a problem. Nothing is retried; a caller talking to a
/// person may re-prompt on error.
pub fn parse_problem(
    variables: &str,
    profits: &str,
    matrix: &str,
    limits: &str,
) -> Result<ProductionProblem, InputError> {
    let n = Parser::parse_count(variables).map_err(in_field("variable count"))?;
    let profits = Parser::parse_vector(profits, n, "profits").map_err(in_field("profits"))?;
    let matrix = Parser::parse_matrix(matrix, n).map_err(in_field("consumption matrix"))?;
    let limits = Parser::parse_vector(limits, n, "resource limits").map_err(in_field("resource limits"))?;

    debug!(variables = n, "parsed problem input");
    Ok(ProductionProblem::new(profits, matrix, limits)?)
}

fn in_field(field: &'static str) -> impl Fn(ParseError) -> InputError {
    move |source| InputError::Parse { field, source }
}
