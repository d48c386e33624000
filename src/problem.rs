// File: src/problem.rs
//
// Deterministic problem construction for the benchmarks.
// A fixed (seed, size) pair always yields bit-identical arrays, so timing
// results stay comparable across runs and across implementations in other
// languages that build the same instance.

use crate::errors::BenchError;
use nalgebra::{DMatrix, DVector};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default matrix/vector dimension.
pub const DEFAULT_SIZE: usize = 10_000;
/// Default RNG seed, shared by both benchmarks.
pub const DEFAULT_SEED: u64 = 123;

/// Input for the eigenvalue benchmark: a real symmetric matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenProblem {
    pub matrix: DMatrix<f64>,
}

/// Input for the multi-operation benchmark: three independent vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiProblem {
    pub p: DVector<f64>,
    pub q: DVector<f64>,
    pub r: DVector<f64>,
}

/// Builds problem instances from a fixed seed and dimension.
///
/// Construction is a pure function of (seed, size). Each call owns its own
/// generator, so independent runs never couple through shared RNG state.
pub struct ProblemBuilder {
    seed: u64,
    size: usize,
}

impl ProblemBuilder {
    pub fn new(seed: u64, size: usize) -> Self {
        Self { seed, size }
    }

    /// Draws an n×n matrix of uniform(0,1) values and symmetrizes it as
    /// `(M + Mᵀ) / 2`, so the eigenvalues downstream are real.
    pub fn eigen_problem(&self) -> Result<EigenProblem, BenchError> {
        let elements = self
            .size
            .checked_mul(self.size)
            .ok_or_else(|| BenchError::allocation("eigenvalue matrix", usize::MAX))?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let data = draw_uniform(&mut rng, elements, "eigenvalue matrix")?;
        let m = DMatrix::from_vec(self.size, self.size, data);
        let matrix = (&m + m.transpose()) / 2.0;
        Ok(EigenProblem { matrix })
    }

    /// Draws three independent uniform(0,1) vectors of length n from a
    /// single seeded stream, in the order p, q, r.
    pub fn multi_problem(&self) -> Result<MultiProblem, BenchError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let p = DVector::from_vec(draw_uniform(&mut rng, self.size, "vector p")?);
        let q = DVector::from_vec(draw_uniform(&mut rng, self.size, "vector q")?);
        let r = DVector::from_vec(draw_uniform(&mut rng, self.size, "vector r")?);
        Ok(MultiProblem { p, q, r })
    }
}

fn draw_uniform(
    rng: &mut StdRng,
    elements: usize,
    what: &str,
) -> Result<Vec<f64>, BenchError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(elements)
        .map_err(|_| BenchError::allocation(what, elements))?;

    let dist = Uniform::new(0.0f64, 1.0);
    for _ in 0..elements {
        values.push(rng.sample(dist));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eigen_problem_is_deterministic() {
        let builder = ProblemBuilder::new(123, 6);
        let a = builder.eigen_problem().unwrap();
        let b = builder.eigen_problem().unwrap();
        assert_eq!(a.matrix, b.matrix);
    }

    #[test]
    fn test_multi_problem_is_deterministic() {
        let builder = ProblemBuilder::new(123, 16);
        let a = builder.multi_problem().unwrap();
        let b = builder.multi_problem().unwrap();
        assert_eq!(a.p, b.p);
        assert_eq!(a.q, b.q);
        assert_eq!(a.r, b.r);
    }

    #[test]
    fn test_different_seeds_give_different_instances() {
        let a = ProblemBuilder::new(123, 8).multi_problem().unwrap();
        let b = ProblemBuilder::new(124, 8).multi_problem().unwrap();
        assert_ne!(a.p, b.p);
    }

    #[test]
    fn test_eigen_matrix_is_exactly_symmetric() {
        let problem = ProblemBuilder::new(123, 7).eigen_problem().unwrap();
        let m = &problem.matrix;
        for i in 0..7 {
            for j in 0..7 {
                assert_eq!(m[(i, j)], m[(j, i)], "asymmetry at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_values_are_uniform_open_interval() {
        let problem = ProblemBuilder::new(123, 32).multi_problem().unwrap();
        for v in problem.q.iter() {
            assert!(*v >= 0.0 && *v < 1.0);
        }
    }

    #[test]
    fn test_vector_lengths_match_size() {
        let problem = ProblemBuilder::new(123, 12).multi_problem().unwrap();
        assert_eq!(problem.p.len(), 12);
        assert_eq!(problem.q.len(), 12);
        assert_eq!(problem.r.len(), 12);
    }

    #[test]
    fn test_vectors_are_independent_draws() {
        let problem = ProblemBuilder::new(123, 12).multi_problem().unwrap();
        assert_ne!(problem.p, problem.q);
        assert_ne!(problem.q, problem.r);
    }

    #[test]
    fn test_oversized_shape_reports_allocation_error() {
        let builder = ProblemBuilder::new(123, usize::MAX);
        let err = builder.eigen_problem().unwrap_err();
        assert!(matches!(err, BenchError::Allocation { .. }));
    }
}
