use num_bigint::BigInt;

use crate::error::LagrangeError;

/// A decoded evaluation point: a share index paired with its integer value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u64,
    pub y: BigInt,
}

impl Point {
    /// Create a point. The x coordinate 0 is reserved for the secret itself
    /// and is rejected.
    pub fn new(x: u64, y: BigInt) -> Result<Self, LagrangeError> {
        if x == 0 {
            return Err(LagrangeError::InvalidPointId(x));
        }

        Ok(Point { x, y })
    }
}
