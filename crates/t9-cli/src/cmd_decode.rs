/// Implementation of `t9 decode`.
///
/// Reads key presses from a file or stdin, decodes them, and writes the
/// text to stdout or `-o <file>`. Diagnostics are logged as warnings on
/// stderr and never stop the decode; `--strict` turns their presence
/// into a non-zero exit after the output has been written.
///
/// # Line mode
///
/// Key press files usually end with a newline, which is not a key press
/// and would otherwise be reported as an invalid character. `--lines`
/// decodes each line with its own decoder, so runs never continue across
/// lines and the newlines carry over to the output.
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result, bail};
use t9_decoder::DecoderConfig;

use crate::DecodeArgs;
use crate::input::{decode_input, parse_overflow_policy, read_input};

/// Run the `t9 decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a flag value is
/// unrecognised, the output cannot be written, or `--strict` is set and
/// a diagnostic was reported.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let config = DecoderConfig::with_overflow(parse_overflow_policy(&args.overflow)?);
    let bytes = read_input(&args.input)?;

    let decoded = decode_input(&bytes, &config, args.lines)?;
    for report in &decoded.reports {
        report.log();
    }
    tracing::info!(
        bytes = bytes.len(),
        runs = decoded.runs,
        diagnostics = decoded.reports.len(),
        "decoded {}",
        args.input.display()
    );

    if let Some(path) = &args.output {
        fs::write(path, decoded.text.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(decoded.text.as_bytes())
            .context("cannot write to stdout")?;
        if !decoded.text.ends_with('\n') {
            handle.write_all(b"\n").context("cannot write to stdout")?;
        }
    }

    if args.strict && !decoded.reports.is_empty() {
        let count = decoded.reports.len();
        bail!(
            "{count} diagnostic{} reported in strict mode",
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
