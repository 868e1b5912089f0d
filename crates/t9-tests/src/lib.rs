//! Shared helpers for the T9 integration tests and benches.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use t9_decoder::FlushedRun;

/// Names of every fixture directory under `tests/golden/`.
pub const GOLDEN_FIXTURES: &[&str] = &[
    "hello_world",
    "hihi",
    "invalid_characters",
    "overflow",
    "pangram",
    "pauses",
];

fn golden_dir(fixture: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(fixture)
}

/// Raw key presses of a fixture (`tests/golden/<fixture>/input.t9`).
///
/// # Panics
///
/// Panics if the fixture file is missing.
#[must_use]
pub fn golden_input(fixture: &str) -> Vec<u8> {
    let path = golden_dir(fixture).join("input.t9");
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// Expected decode of a fixture (`tests/golden/<fixture>/expected.txt`).
///
/// # Panics
///
/// Panics if the fixture file is missing or not UTF-8.
#[must_use]
pub fn golden_expected(fixture: &str) -> String {
    let path = golden_dir(fixture).join("expected.txt");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// One line per run: `offset: key xpresses -> 'letter'`.
#[must_use]
pub fn render_runs(runs: &[FlushedRun]) -> String {
    runs.iter().fold(String::new(), |mut out, run| {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(
            out,
            "{}: {} x{} -> {:?}",
            run.offset, run.key, run.presses, run.letter
        );
        out
    })
}

/// A long, realistic key press stream: `text` encoded and repeated
/// `times`, separated by pauses.
///
/// # Panics
///
/// Panics if `text` contains characters without a key.
#[must_use]
pub fn repeated_presses(text: &str, times: usize) -> String {
    let presses = t9_encoder::T9Encoder::new()
        .encode(text)
        .expect("bench text must be encodable");
    vec![presses; times].join(" ")
}
