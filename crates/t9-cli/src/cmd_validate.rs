/// Implementation of `t9 validate`.
///
/// Decodes the input and reports every diagnostic. Exits 0 when the
/// input is clean, 1 otherwise (the main dispatcher converts `Err` to
/// exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Input: 13 bytes read
/// ✓ Runs: 4 runs decoded
/// ✓ Diagnostics: none
/// ```
///
/// # Failure output
///
/// ```text
/// ✓ Input: 5 bytes read
/// ✓ Runs: 2 runs decoded
/// ✗ invalid input character '*' at offset 3
/// ```
///
/// With `--json` the same information is printed as one JSON object:
///
/// ```json
/// {"valid":false,"bytes":5,"runs":2,"diagnostics":[
///   {"kind":"invalid_character","character":"*","offset":3,"line":null,
///    "message":"invalid input character '*' at offset 3"}]}
/// ```
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use t9_decoder::DecoderConfig;

use crate::ValidateArgs;
use crate::input::{Report, decode_input, parse_overflow_policy, read_input};

/// Machine-readable validation result.
#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    bytes: usize,
    runs: usize,
    diagnostics: Vec<DiagnosticEntry>,
}

#[derive(Serialize)]
struct DiagnosticEntry {
    kind: &'static str,
    character: char,
    offset: usize,
    line: Option<usize>,
    message: String,
}

impl From<&Report> for DiagnosticEntry {
    fn from(report: &Report) -> Self {
        Self {
            kind: report.diagnostic.kind(),
            character: report.diagnostic.character(),
            offset: report.diagnostic.offset(),
            line: report.line,
            message: report.diagnostic.to_string(),
        }
    }
}

/// Run the `t9 validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a flag is invalid, or
/// the input produced at least one diagnostic.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let config = DecoderConfig::with_overflow(parse_overflow_policy(&args.overflow)?);
    let bytes = read_input(&args.input)?;
    let decoded = decode_input(&bytes, &config, args.lines)?;
    let valid = decoded.reports.is_empty();

    if args.json {
        let report = ValidationReport {
            valid,
            bytes: bytes.len(),
            runs: decoded.runs,
            diagnostics: decoded.reports.iter().map(DiagnosticEntry::from).collect(),
        };
        let json = serde_json::to_string_pretty(&report).context("cannot serialise report")?;
        println!("{json}");
    } else {
        println!(
            "✓ Input: {} byte{} read",
            bytes.len(),
            if bytes.len() == 1 { "" } else { "s" }
        );
        println!(
            "✓ Runs: {} run{} decoded",
            decoded.runs,
            if decoded.runs == 1 { "" } else { "s" }
        );
        if valid {
            println!("✓ Diagnostics: none");
        }
        for report in &decoded.reports {
            match report.line {
                Some(line) => println!("✗ line {line}: {}", report.diagnostic),
                None => println!("✗ {}", report.diagnostic),
            }
        }
    }

    if valid {
        Ok(())
    } else {
        Err(anyhow!("validation failed"))
    }
}
