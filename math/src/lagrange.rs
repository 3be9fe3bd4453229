//! Exact Lagrange interpolation at x = 0.
//!
//! The constant term of the unique degree-(k-1) polynomial through k points
//! is `Σ y_i · L_i(0)` with `L_i(0) = Π_{j≠i} (0 − x_j)/(x_i − x_j)`. Basis
//! values are accumulated as big rationals so nothing is rounded away before
//! the final conversion to an integer.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::LagrangeError;
use crate::point::Point;

/// Evaluate at x = 0 the polynomial through the first `k` points.
///
/// Only the first `k` entries participate, in the order the caller supplied
/// them. Their x coordinates must be pairwise distinct.
pub fn interpolate_at_zero(
    points: &[Point],
    k: usize,
) -> Result<BigInt, LagrangeError> {
    if k == 0 {
        return Err(LagrangeError::ZeroThreshold);
    }
    if points.len() < k {
        return Err(LagrangeError::InsufficientPoints {
            required: k,
            provided: points.len(),
        });
    }

    let active = &points[..k];
    check_distinct_x(active)?;

    let mut sum = BigRational::zero();
    for (i, point) in active.iter().enumerate() {
        let xi = BigInt::from(point.x);

        let mut basis = BigRational::one();
        for (j, other) in active.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigInt::from(other.x);
            // Distinctness was checked above, so the denominator is nonzero.
            basis *= BigRational::new(-xj.clone(), &xi - &xj);
        }

        sum += BigRational::from(point.y.clone()) * basis;
    }

    // For points on an integer-coefficient polynomial the sum already has a
    // unit denominator; rounding only absorbs representation slack.
    Ok(sum.round().to_integer())
}

fn check_distinct_x(active: &[Point]) -> Result<(), LagrangeError> {
    for (i, point) in active.iter().enumerate() {
        if active[..i].iter().any(|other| other.x == point.x) {
            return Err(LagrangeError::DuplicatePoint(point.x));
        }
    }

    Ok(())
}
