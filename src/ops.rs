// File: src/ops.rs
//
// The operations under test. The harness computes their results and
// discards them; only the wall-clock cost is of interest, so nothing here
// validates numerical output.

use crate::problem::{EigenProblem, MultiProblem};
use nalgebra::{DMatrix, DVector};

/// Eigenvalues of the symmetric matrix.
pub fn eigenvalues(problem: &EigenProblem) -> Result<DVector<f64>, String> {
    Ok(problem.matrix.symmetric_eigenvalues())
}

/// The chained product `pᵀ · inv(diag(q)) · r` as a scalar.
///
/// The diagonal matrix is inverted as a full dense matrix, matching the
/// reference workloads in other languages rather than exploiting the
/// diagonal structure.
pub fn multi_chain(problem: &MultiProblem) -> Result<f64, String> {
    let diag = DMatrix::from_diagonal(&problem.q);
    let inv = diag
        .try_inverse()
        .ok_or_else(|| "diagonal matrix is singular".to_string())?;
    Ok(problem.p.dot(&(&inv * &problem.r)))
}
