pub mod error;
pub mod solver;
pub mod testcase;

pub use solver::{recover_from_path, recover_from_slice, recover_secret};
pub use testcase::TestCase;
