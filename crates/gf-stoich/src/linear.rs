//! Direct solve of the fixed-size 2×2 systems used by the calculators.

use crate::error::{StoichError, StoichResult};
use gf_core::Real;
use nalgebra::{Matrix2, Vector2};

/// Singularity threshold on the Hadamard ratio
/// `|det| / (|row_1| * |row_2|)`, which lies in `[0, 1]` and is 1 for
/// orthogonal rows.
pub const SINGULAR_EPS: Real = 1e-12;

const NO_UNIQUE_SOLUTION: StoichError = StoichError::Domain {
    what: "no unique solution",
};

/// `|det| / (|row_1| * |row_2|)`; zero for a matrix with a zero row.
pub fn hadamard_ratio(a: &Matrix2<Real>) -> Real {
    let norms = a.row(0).norm() * a.row(1).norm();
    if norms == 0.0 || !norms.is_finite() {
        return 0.0;
    }
    a.determinant().abs() / norms
}

/// Solve `a * x = b` by Cramer's rule.
///
/// Fails with "no unique solution" when the rows are (nearly) parallel, when
/// a coefficient is not finite, or when the solution is not finite.
pub fn solve_2x2(a: &Matrix2<Real>, b: &Vector2<Real>) -> StoichResult<Vector2<Real>> {
    if a.iter().chain(b.iter()).any(|v| !v.is_finite()) {
        return Err(NO_UNIQUE_SOLUTION);
    }
    if hadamard_ratio(a) <= SINGULAR_EPS {
        return Err(NO_UNIQUE_SOLUTION);
    }

    let det = a.determinant();
    let x = Vector2::new(
        (b[0] * a[(1, 1)] - a[(0, 1)] * b[1]) / det,
        (a[(0, 0)] * b[1] - b[0] * a[(1, 0)]) / det,
    );
    if !x.iter().all(|v| v.is_finite()) {
        return Err(NO_UNIQUE_SOLUTION);
    }
    Ok(x)
}

/// `a * x - b`
pub fn residual(a: &Matrix2<Real>, x: &Vector2<Real>, b: &Vector2<Real>) -> Vector2<Real> {
    a * x - b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_well_conditioned_system() {
        // x + y = 3, x - y = 1
        let a = Matrix2::new(1.0, 1.0, 1.0, -1.0);
        let b = Vector2::new(3.0, 1.0);
        let x = solve_2x2(&a, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
        assert!(residual(&a, &x, &b).amax() < 1e-12);
    }

    #[test]
    fn exactly_singular_rejected() {
        let a = Matrix2::new(1.0, 2.0, 2.0, 4.0);
        let err = solve_2x2(&a, &Vector2::new(1.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            StoichError::Domain {
                what: "no unique solution"
            }
        );
    }

    #[test]
    fn nearly_singular_rejected() {
        let a = Matrix2::new(1.0, 1.0, 1.0, 1.0 + 1e-14);
        let err = solve_2x2(&a, &Vector2::new(1.0, 0.0)).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn singularity_threshold_is_scale_free() {
        // Well conditioned but tiny entries.
        let a = Matrix2::new(1e-9, 0.0, 0.0, 1e-9);
        let x = solve_2x2(&a, &Vector2::new(1e-9, 2e-9)).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-9);
        assert!((x[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_matrix_rejected() {
        let err = solve_2x2(&Matrix2::zeros(), &Vector2::new(1.0, 1.0)).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn non_finite_coefficient_has_no_unique_solution() {
        let a = Matrix2::new(Real::INFINITY, 1.0, 1.0, -1.0);
        assert_eq!(solve_2x2(&a, &Vector2::new(1.0, 0.0)), Err(NO_UNIQUE_SOLUTION));
    }

    #[test]
    fn large_entries_in_one_row_still_solve() {
        // rows far apart in magnitude but far from parallel
        let a = Matrix2::new(1.0, 1.0, 1.0, -3e14);
        let b = Vector2::new(0.5, 0.0);
        let x = solve_2x2(&a, &b).unwrap();
        assert!(residual(&a, &x, &b).amax() < 1e-9);
        assert!(hadamard_ratio(&a) > 0.5);
    }
}
