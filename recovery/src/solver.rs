//! Per-test-case recovery pipeline: decode every present root, then
//! interpolate the first k points at x = 0.

use std::fs;
use std::path::Path;

use num_bigint::BigInt;

use math::{error::MathError, lagrange, point::Point, radix};

use crate::{
    error::{RecoveryError, RecoveryResult},
    testcase::TestCase,
};

/// Recover the hidden constant term of a test case.
///
/// Roots are visited in ascending index order, 1..=n. A single undecodable
/// root aborts the whole case; a partial point set is never interpolated.
pub fn recover_secret(case: &TestCase) -> RecoveryResult<BigInt> {
    case.validate()?;

    let points = decode_points(case)?;
    let k = case.keys.k;
    if points.len() < k {
        return Err(RecoveryError::InsufficientPoints {
            required: k,
            provided: points.len(),
        });
    }

    let secret =
        lagrange::interpolate_at_zero(&points, k).map_err(MathError::from)?;
    Ok(secret)
}

/// Parse a JSON payload and recover its secret.
pub fn recover_from_slice(payload: &[u8]) -> RecoveryResult<BigInt> {
    let case: TestCase = serde_json::from_slice(payload)?;
    recover_secret(&case)
}

/// Load a test-case file and recover its secret.
pub fn recover_from_path(path: impl AsRef<Path>) -> RecoveryResult<BigInt> {
    let payload = fs::read(path)?;
    recover_from_slice(&payload)
}

/// Decode every present root into a point, in ascending index order.
fn decode_points(case: &TestCase) -> RecoveryResult<Vec<Point>> {
    let mut points = Vec::new();

    for index in 1..=case.keys.n {
        let Some(root) = case.root(index) else {
            continue;
        };

        let base = root.parsed_base().ok_or_else(|| RecoveryError::BadBase {
            index,
            base: root.base.clone(),
        })?;
        let y = radix::decode(&root.value, base)
            .map_err(|source| RecoveryError::BadRoot { index, source })?;

        let point = Point::new(index, y).map_err(MathError::from)?;
        points.push(point);
    }

    Ok(points)
}
