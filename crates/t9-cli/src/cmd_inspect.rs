/// Implementation of `t9 inspect`.
///
/// Decodes the input and prints one row per run, followed by any
/// diagnostics. Useful for seeing exactly how presses were grouped.
///
/// # Output format
///
/// ```text
/// Input: 11 bytes, 3 runs, 1 diagnostic
///
/// Offset  Key  Presses  Letter
/// ────────────────────────────
///      0    2        2  'b'
///      2    7        2  'q'
///      6    7        5  'p'
/// ────────────────────────────
/// ✗ invalid input character '*' at offset 3
/// ```
use anyhow::Result;
use t9_decoder::{Diagnostic, DecoderConfig, FlushedRun, T9Decoder};

use crate::InspectArgs;
use crate::input::{parse_overflow_policy, read_input};

const RULE: &str = "────────────────────────────";

/// Run the `t9 inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or `--overflow` is not
/// a known policy.
pub fn run(args: &InspectArgs) -> Result<()> {
    let config = DecoderConfig::with_overflow(parse_overflow_policy(&args.overflow)?);
    let bytes = read_input(&args.input)?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let runs: Vec<FlushedRun> = T9Decoder::with_config(config, &mut diagnostics)
        .runs(bytes.iter().map(|&b| char::from(b)))
        .collect();

    println!(
        "Input: {} byte{}, {} run{}, {} diagnostic{}",
        bytes.len(),
        plural(bytes.len()),
        runs.len(),
        plural(runs.len()),
        diagnostics.len(),
        plural(diagnostics.len()),
    );
    println!();
    println!("Offset  Key  Presses  Letter");
    println!("{RULE}");
    for run in &runs {
        println!(
            "{:>6}  {:>3}  {:>7}  {:?}",
            run.offset,
            run.key.to_char(),
            run.presses,
            run.letter
        );
    }
    println!("{RULE}");

    for diagnostic in &diagnostics {
        println!("✗ {diagnostic}");
    }

    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
