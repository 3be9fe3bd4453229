//! Recover the secrets of the two built-in sample payloads, or of JSON files
//! passed on the command line.
//!
//! ```sh
//! cargo run --example builtin [case.json ...]
//! ```

use std::env;
use std::process::ExitCode;

use recovery::{recover_from_path, recover_from_slice};

const SAMPLE_SMALL: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

const SAMPLE_MULTI_BASE: &str = r#"{
    "keys": { "n": 10, "k": 7 },
    "1": { "base": "6", "value": "13444211440455345511" },
    "2": { "base": "15", "value": "aed7015a346d635" },
    "3": { "base": "15", "value": "6aeeb69631c227c" },
    "4": { "base": "16", "value": "e1b5e05623d881f" },
    "5": { "base": "8", "value": "316034514573652620673" },
    "6": { "base": "3", "value": "2122212201122002221120200210011020220200" },
    "7": { "base": "3", "value": "20120221122211000100210021102001201112121" },
    "8": { "base": "6", "value": "20220554335330240002224253" },
    "9": { "base": "12", "value": "45153788322a1255483" },
    "10": { "base": "7", "value": "1101613130313526312514143" }
}"#;

fn main() -> ExitCode {
    let paths: Vec<String> = env::args().skip(1).collect();
    let mut failed = false;

    if paths.is_empty() {
        for (name, payload) in
            [("small", SAMPLE_SMALL), ("multi-base", SAMPLE_MULTI_BASE)]
        {
            match recover_from_slice(payload.as_bytes()) {
                Ok(secret) => {
                    println!("{name}: secret (constant term) = {secret}")
                }
                Err(err) => {
                    eprintln!("{name}: {err}");
                    failed = true;
                }
            }
        }
    } else {
        for path in &paths {
            match recover_from_path(path) {
                Ok(secret) => {
                    println!("{path}: secret (constant term) = {secret}")
                }
                Err(err) => {
                    eprintln!("{path}: {err}");
                    failed = true;
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
