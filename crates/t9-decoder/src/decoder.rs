use std::io::{BufReader, Read};
use std::iter::FusedIterator;

use t9_keypad::{Keypad, PAUSE, STANDARD_KEYPAD};

use crate::config::DecoderConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::DecodeError;
use crate::run::{FlushedRun, Run};

/// Where the decoder stands between two input characters.
///
/// ```text
///            digit d                      digit d
///   Idle ───────────────▶ Accumulating(d,1) ───▶ Accumulating(d,n+1)
///    ▲ │                     │      │
///    │ └─ space: no-op       │      └─ digit d' ≠ d: flush, Accumulating(d',1)
///    └───── space: flush ────┘
///
///   invalid character: no transition in any state (diagnostic only)
/// ```
///
/// There is no separate "last seen character". A digit continues the
/// open run exactly when the state is `Accumulating` on the same key: a
/// pause always resets to `Idle`, and invalid characters never move the
/// state, so `"7*7"` is one run of two presses while `"7 7"` is two runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No run open. Initial state, and the state after every pause.
    #[default]
    Idle,
    /// A run is open and will be flushed by the next pause, the next
    /// different key, or end of input.
    Accumulating(Run),
}

impl RunState {
    /// The open run, if any.
    #[must_use]
    pub fn into_run(self) -> Option<Run> {
        match self {
            Self::Idle => None,
            Self::Accumulating(run) => Some(run),
        }
    }
}

/// Incremental multi-tap decoder.
///
/// Feed characters one at a time with [`push`](Self::push); each call
/// returns the run it closed, if any. Call [`finish`](Self::finish) at
/// end of input to flush the trailing run.
///
/// Processing per character:
///
///   1. **Pause** (`' '`): flush the open run, if any, and go `Idle`.
///      Consecutive pauses produce nothing.
///   2. **Mapped key** (`'0'`, `'2'..='9'`): extend the open run when it
///      is on the same key; otherwise flush it and open a new run.
///   3. **Anything else**: report [`Diagnostic::InvalidCharacter`] to the
///      sink and skip it. The state is untouched.
///
/// Diagnostics never stop the decoder. A `T9Decoder` is meant for one
/// decode; `finish` resets it, so reusing it afterwards starts a new,
/// independent decode at offset 0.
///
/// # Example
///
/// ```rust
/// use t9_decoder::{T9Decoder, TracingSink};
///
/// let mut decoder = T9Decoder::new(TracingSink);
/// let mut text = String::new();
/// for c in "44 444".chars() {
///     if let Some(run) = decoder.push(c) {
///         text.push(run.letter);
///     }
/// }
/// text.extend(decoder.finish().map(|run| run.letter));
/// assert_eq!(text, "hi");
/// ```
pub struct T9Decoder<S> {
    keypad: Keypad,
    config: DecoderConfig,
    state: RunState,
    position: usize,
    sink: S,
}

impl<S: DiagnosticSink> T9Decoder<S> {
    /// Decoder on the standard keypad with the default config.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_config(DecoderConfig::default(), sink)
    }

    #[must_use]
    pub fn with_config(config: DecoderConfig, sink: S) -> Self {
        Self {
            keypad: STANDARD_KEYPAD,
            config,
            state: RunState::Idle,
            position: 0,
            sink,
        }
    }

    /// Current state of the run state machine.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of characters consumed since construction or the last
    /// [`finish`](Self::finish).
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Consume one input character.
    ///
    /// Returns the run this character closed, if it closed one.
    pub fn push(&mut self, c: char) -> Option<FlushedRun> {
        let offset = self.position;
        self.position += 1;

        if c == PAUSE {
            let closed = std::mem::take(&mut self.state).into_run();
            return closed.map(|run| self.flush(run));
        }

        let Some(key) = self.keypad.key_for(c) else {
            self.sink.report(Diagnostic::InvalidCharacter {
                character: c,
                offset,
            });
            return None;
        };

        if let RunState::Accumulating(run) = &mut self.state
            && run.key() == key
        {
            run.press();
            return None;
        }

        let closed = std::mem::replace(
            &mut self.state,
            RunState::Accumulating(Run::start(key, offset)),
        )
        .into_run();
        closed.map(|run| self.flush(run))
    }

    /// Signal end of input: flush the trailing run and reset to `Idle`
    /// at offset 0.
    pub fn finish(&mut self) -> Option<FlushedRun> {
        self.position = 0;
        let closed = std::mem::take(&mut self.state).into_run();
        closed.map(|run| self.flush(run))
    }

    /// Drive this decoder lazily over `input`.
    pub fn runs<I>(self, input: I) -> Runs<I::IntoIter, S>
    where
        I: IntoIterator<Item = char>,
    {
        Runs {
            input: input.into_iter(),
            decoder: self,
            exhausted: false,
        }
    }

    fn flush(&mut self, run: Run) -> FlushedRun {
        run.resolve(&self.keypad, self.config.overflow, &mut self.sink)
    }
}

/// Lazy sequence of [`FlushedRun`]s over a character iterator.
///
/// Input is pulled only as far as needed to close the next run; the
/// trailing run is flushed once the input iterator is exhausted.
pub struct Runs<I, S> {
    input: I,
    decoder: T9Decoder<S>,
    exhausted: bool,
}

impl<I, S> Runs<I, S> {
    /// Give the decoder back, e.g. to recover its sink.
    pub fn into_decoder(self) -> T9Decoder<S> {
        self.decoder
    }
}

impl<I, S> Iterator for Runs<I, S>
where
    I: Iterator<Item = char>,
    S: DiagnosticSink,
{
    type Item = FlushedRun;

    fn next(&mut self) -> Option<FlushedRun> {
        if self.exhausted {
            return None;
        }
        for c in self.input.by_ref() {
            if let Some(run) = self.decoder.push(c) {
                return Some(run);
            }
        }
        self.exhausted = true;
        self.decoder.finish()
    }
}

impl<I, S> FusedIterator for Runs<I, S>
where
    I: Iterator<Item = char>,
    S: DiagnosticSink,
{
}

/// Decode a string of key presses with the default config, sending
/// diagnostics to `tracing`.
///
/// ```rust
/// assert_eq!(t9_decoder::decode("44 444 44 444"), "hihi");
/// ```
#[must_use]
pub fn decode(input: &str) -> String {
    decode_with(input, &DecoderConfig::default(), TracingSink)
}

/// Decode a string of key presses, reporting diagnostics to `sink`.
///
/// Always returns a complete result; malformed input shows up in the
/// sink and, for unresolvable runs, as `'?'` in the output.
#[must_use]
pub fn decode_with<S: DiagnosticSink>(input: &str, config: &DecoderConfig, sink: S) -> String {
    tracing::debug!(len = input.len(), overflow = ?config.overflow, "decoding key presses");
    let decoded: String = T9Decoder::with_config(*config, sink)
        .runs(input.chars())
        .map(|run| run.letter)
        .collect();
    tracing::debug!(letters = decoded.chars().count(), "decode finished");
    decoded
}

/// Decode key presses from a byte source.
///
/// Each byte is one input character, so any non-ASCII byte is reported
/// as an invalid character on its own. Reading stops at end of stream.
///
/// # Errors
///
/// [`DecodeError::Io`] if the reader fails. Diagnostics are never
/// errors.
pub fn decode_reader<R: Read, S: DiagnosticSink>(
    reader: R,
    config: &DecoderConfig,
    sink: S,
) -> Result<String, DecodeError> {
    let mut decoder = T9Decoder::with_config(*config, sink);
    let mut decoded = String::new();

    for byte in BufReader::new(reader).bytes() {
        if let Some(run) = decoder.push(char::from(byte?)) {
            decoded.push(run.letter);
        }
    }
    decoded.extend(decoder.finish().map(|run| run.letter));

    tracing::debug!(letters = decoded.chars().count(), "reader decode finished");
    Ok(decoded)
}
