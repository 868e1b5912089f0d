//! Input handling shared by the decoding sub-commands: reading `<FILE>`
//! or stdin, parsing `--overflow`, and decoding whole-input or
//! line-by-line.

use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use t9_decoder::{Diagnostic, DecoderConfig, OverflowPolicy, decode_reader};

/// Read the whole input. A path of `-` means stdin.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("cannot read stdin")?;
        Ok(bytes)
    } else {
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))
    }
}

/// Parses the `--overflow` string to an [`OverflowPolicy`].
///
/// # Errors
///
/// Returns an error for unrecognised policy names.
pub fn parse_overflow_policy(s: &str) -> Result<OverflowPolicy> {
    match s.to_lowercase().as_str() {
        "wrap" => Ok(OverflowPolicy::Wrap),
        "clamp" => Ok(OverflowPolicy::Clamp),
        "placeholder" | "error" => Ok(OverflowPolicy::Placeholder),
        _ => Err(anyhow!(
            "unknown overflow policy {s:?}, expected wrap|clamp|placeholder"
        )),
    }
}

/// A diagnostic together with the 1-based line it came from, when the
/// input was decoded line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub line: Option<usize>,
    pub diagnostic: Diagnostic,
}

impl Report {
    /// Emit the report as a `WARN` event.
    pub fn log(&self) {
        match self.line {
            Some(line) => tracing::warn!(line, "{}", self.diagnostic),
            None => tracing::warn!("{}", self.diagnostic),
        }
    }
}

/// Result of decoding one input.
#[derive(Debug, Default)]
pub struct DecodedInput {
    pub text: String,
    /// Number of flushed runs. Each run yields exactly one letter.
    pub runs: usize,
    pub reports: Vec<Report>,
}

/// Decode `bytes` as one key press stream, or, with `per_line`, each
/// line as its own stream with a fresh decoder.
///
/// In line mode a trailing newline does not start an extra empty line,
/// and a `\r` before `\n` is dropped. Decoded lines are joined with `\n`.
///
/// # Errors
///
/// Propagates [`t9_decoder::DecodeError`]; in-memory input never fails
/// to read, so this only fails if that invariant breaks.
pub fn decode_input(bytes: &[u8], config: &DecoderConfig, per_line: bool) -> Result<DecodedInput> {
    if !per_line {
        let mut diagnostics = Vec::new();
        let text = decode_reader(bytes, config, &mut diagnostics)?;
        return Ok(DecodedInput {
            runs: text.chars().count(),
            text,
            reports: diagnostics
                .into_iter()
                .map(|diagnostic| Report {
                    line: None,
                    diagnostic,
                })
                .collect(),
        });
    }

    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let mut decoded = DecodedInput::default();
    let mut lines = Vec::new();

    for (idx, line) in body.split(|&b| b == b'\n').enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let mut diagnostics = Vec::new();
        let text = decode_reader(line, config, &mut diagnostics)
            .with_context(|| format!("line {}", idx + 1))?;

        decoded.runs += text.chars().count();
        decoded
            .reports
            .extend(diagnostics.into_iter().map(|diagnostic| Report {
                line: Some(idx + 1),
                diagnostic,
            }));
        lines.push(text);
    }

    decoded.text = lines.join("\n");
    Ok(decoded)
}
