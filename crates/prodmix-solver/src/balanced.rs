use crate::numeric::{floor_units, max_abs};
use crate::problem::{ValidationError, check_limits, check_row};
use crate::solution::SolveError;

/// Solves for the production mix that uses up every resource exactly
#[derive(Debug, Clone, Copy)]
pub struct BalancedSolver {
    /// Relative tolerance for singular pivots
    tolerance: f64,
}

/// Solution of the balanced system before profits are attached
#[derive(Debug, Clone, PartialEq)]
pub struct BalancedSolution {
    /// Exact per-variable units
    pub exact: Vec<f64>,
    /// Floored per-variable units
    pub units: Vec<i64>,
}

impl Default for BalancedSolver {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

impl BalancedSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Solve `A x = b` where `A` is the transposed consumption matrix (rows are
    /// resources) and `b` the resource limits.
    pub fn solve(
        &self,
        consumption: &[Vec<f64>],
        resource_limits: &[f64],
    ) -> Result<BalancedSolution, SolveError> {
        let n = consumption.len();
        if n == 0 {
            return Err(ValidationError::NoVariables.into());
        }
        for (i, row) in consumption.iter().enumerate() {
            if row.len() != n {
                return Err(ValidationError::NotSquare {
                    variable: i + 1,
                    expected: n,
                    found: row.len(),
                }
                .into());
            }
            check_row(i + 1, row)?;
        }
        check_limits(resource_limits, n)?;

        // Coefficients: resource r consumed by variable v
        let coefficients: Vec<Vec<f64>> = (0..n)
            .map(|r| consumption.iter().map(|row| row[r]).collect())
            .collect();

        let lu = LuDecomposition::factor(coefficients, self.tolerance)?;
        let exact = lu.solve(resource_limits);
        let units = exact
            .iter()
            .map(|&x| floor_units(x) as i64)
            .collect();

        Ok(BalancedSolution { exact, units })
    }
}

/// LU factorization with partial pivoting, `P A = L U`.
///
/// `L` (unit diagonal, below) and `U` (diagonal and above) share storage.
struct LuDecomposition {
    lu: Vec<Vec<f64>>,
    /// `perm[i]` is the original row now at position `i`
    perm: Vec<usize>,
}

impl LuDecomposition {
    fn factor(mut a: Vec<Vec<f64>>, tolerance: f64) -> Result<Self, SolveError> {
        let n = a.len();
        let threshold = tolerance * max_abs(&a);
        let mut perm: Vec<usize> = (0..n).collect();

        for k in 0..n {
            let mut pivot_row = k;
            let mut pivot_abs = a[k][k].abs();
            for i in (k + 1)..n {
                if a[i][k].abs() > pivot_abs {
                    pivot_abs = a[i][k].abs();
                    pivot_row = i;
                }
            }

            // A zero matrix has threshold 0, so compare with <=
            if pivot_abs <= threshold {
                return Err(SolveError::NoUniqueBalancedSolution {
                    pivot: pivot_abs,
                    threshold,
                });
            }

            if pivot_row != k {
                a.swap(pivot_row, k);
                perm.swap(pivot_row, k);
            }

            for i in (k + 1)..n {
                let factor = a[i][k] / a[k][k];
                a[i][k] = factor;
                for j in (k + 1)..n {
                    a[i][j] -= factor * a[k][j];
                }
            }
        }

        Ok(Self { lu: a, perm })
    }

    fn solve(&self, b: &[f64]) -> Vec<f64> {
        let n = self.lu.len();

        // Forward substitution, L y = P b
        let mut x: Vec<f64> = self.perm.iter().map(|&p| b[p]).collect();
        for i in 0..n {
            for j in 0..i {
                x[i] -= self.lu[i][j] * x[j];
            }
        }

        // Back substitution, U x = y
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                x[i] -= self.lu[i][j] * x[j];
            }
            x[i] /= self.lu[i][i];
        }

        x
    }
}
