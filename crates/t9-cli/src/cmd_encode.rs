/// Implementation of `t9 encode`.
///
/// Turns text into the key presses that decode back to it. The text is
/// the positional argument, or the contents of `--file` (`-` for stdin)
/// with one trailing newline removed.
///
/// ```text
/// $ t9 encode "hello world"
/// 4433555 555666096667775553
/// ```
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result, anyhow};
use t9_encoder::T9Encoder;

use crate::EncodeArgs;
use crate::input::read_input;

/// Run the `t9 encode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not UTF-8, a
/// character has no key, or the output cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            let bytes = read_input(path)?;
            let mut text = String::from_utf8(bytes)
                .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            text
        }
        (None, None) => return Err(anyhow!("nothing to encode: pass TEXT or --file")),
    };

    let mut encoder = T9Encoder::new();
    if args.pause_all {
        encoder = encoder.pause_between_letters();
    }
    let presses = encoder.encode(&text).context("cannot encode text")?;
    tracing::info!(letters = text.chars().count(), presses = presses.len(), "encoded");

    if let Some(path) = &args.output {
        fs::write(path, presses.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{presses}").context("cannot write to stdout")?;
    }

    Ok(())
}
