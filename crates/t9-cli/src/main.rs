/// T9 command-line tool: decode multi-tap key presses into text, encode
/// text into key presses, and inspect or validate key press files.
///
/// # Command overview
///
/// ```text
/// t9 <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode key presses into text
///   encode     Encode text into key presses
///   inspect    Print the run-by-run breakdown of a decode
///   validate   Report every invalid character and overflowing run
///   help       Print help information
///
/// Global options:
///   -v, --verbose        Raise log level (repeat for more: -vv, -vvv)
///   --log-format <FMT>   text (default) | json
///   -h, --help           Print help
///   -V, --version        Print version
/// ```
///
/// `<FILE>` arguments accept `-` for stdin.
///
/// # Exit codes
///
/// | Code | Meaning                                                  |
/// |------|----------------------------------------------------------|
/// | 0    | Success                                                  |
/// | 1    | Error (I/O failure, bad flag, failed validation/strict)  |
///
/// Logs and error details go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;
mod input;
mod logging;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Multi-tap T9 keypad decoder.
#[derive(Parser)]
#[command(name = "t9", version, about = "Multi-tap T9 keypad decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity: warn (default), -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: `text` or `json`.
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode key presses into text.
    Decode(DecodeArgs),
    /// Encode text into key presses.
    Encode(EncodeArgs),
    /// Print the run-by-run breakdown of a decode.
    Inspect(InspectArgs),
    /// Report every invalid character and overflowing run.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `t9 decode`.
///
/// ```text
/// ┌──────────────┬─────────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                              │
/// ├──────────────┼─────────────────────────────────────────────────────┤
/// │ --overflow   │ wrap (default) | clamp | placeholder                │
/// │ --lines      │ decode each line on its own; newlines are not input │
/// │ --strict     │ exit 1 if any diagnostic was reported               │
/// │ -o/--output  │ write to file instead of stdout                     │
/// └──────────────┴─────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Key press file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// What to do when a key is pressed more times than it has letters.
    #[arg(long, default_value = "wrap")]
    pub overflow: String,

    /// Decode every line independently.
    #[arg(long)]
    pub lines: bool,

    /// Fail when the input produced any diagnostic.
    #[arg(long)]
    pub strict: bool,

    /// Write decoded text to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `t9 encode`.
///
/// Text comes from the positional argument or, with `--file`, from a
/// file (`-` for stdin). A trailing newline in file input is dropped.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Text to encode.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text to encode from this file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Pause between every pair of letters, not just same-key pairs.
    #[arg(long)]
    pub pause_all: bool,

    /// Write key presses to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `t9 inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Key press file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Overflow policy: `wrap`, `clamp`, or `placeholder`.
    #[arg(long, default_value = "wrap")]
    pub overflow: String,
}

/// Arguments for `t9 validate`.
///
/// Decodes the input and lists every diagnostic. Exits 0 when there are
/// none, 1 otherwise.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Key press file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Overflow policy: `wrap`, `clamp`, or `placeholder`.
    #[arg(long, default_value = "wrap")]
    pub overflow: String,

    /// Validate every line independently.
    #[arg(long)]
    pub lines: bool,

    /// Print a JSON report instead of ✓/✗ lines.
    #[arg(long)]
    pub json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = logging::parse_log_format(&cli.log_format)
        .and_then(|format| logging::init_logging(cli.verbose, format))
        .and_then(|()| match cli.command {
            Commands::Decode(args) => cmd_decode::run(&args),
            Commands::Encode(args) => cmd_encode::run(&args),
            Commands::Inspect(args) => cmd_inspect::run(&args),
            Commands::Validate(args) => cmd_validate::run(&args),
        });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
