use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{RecoveryError, RecoveryResult};

/// Threshold parameters of a test case.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Keys {
    /// Total number of candidate roots the payload may carry.
    pub n: u64,
    /// How many decoded points the interpolation uses.
    pub k: usize,
}

/// A single base-encoded root as it appears in the JSON payload.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EncodedRoot {
    /// Radix of `value`, itself string-encoded in the payload.
    pub base: String,
    /// Digit string to decode in `base`.
    pub value: String,
}

impl EncodedRoot {
    /// Parse the string-encoded base field.
    pub fn parsed_base(&self) -> Option<u32> {
        self.base.trim().parse().ok()
    }
}

/// A full test-case payload: threshold parameters plus a sparse collection of
/// numbered roots.
///
/// The payload keys other than `keys` are decimal indices ("1", "2", ...);
/// indices inside 1..=n may be absent, higher ones are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub keys: Keys,
    #[serde(flatten)]
    pub roots: BTreeMap<String, EncodedRoot>,
}

impl TestCase {
    /// Root at a given 1-based index, if the payload carries it.
    pub fn root(&self, index: u64) -> Option<&EncodedRoot> {
        self.roots.get(&index.to_string())
    }

    /// Check the threshold configuration: k points determine a degree k-1
    /// polynomial, so k must be at least 1 and at most n.
    pub fn validate(&self) -> RecoveryResult<()> {
        let Keys { n, k } = self.keys;
        if k == 0 || k as u64 > n {
            return Err(RecoveryError::InvalidThreshold { k, n });
        }

        Ok(())
    }
}
