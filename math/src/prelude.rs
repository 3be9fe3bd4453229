pub use crate::{
    error::{LagrangeError, MathError, RadixError, Result},
    lagrange::interpolate_at_zero,
    point::Point,
    radix::{decode, MAX_BASE, MIN_BASE},
};
