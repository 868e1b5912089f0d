use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::DecoderConfig;
use crate::decoder::T9Decoder;
use crate::diagnostic::DiagnosticSink;
use crate::error::DecodeError;
use crate::run::FlushedRun;

const READ_BUF_SIZE: usize = 4096;

/// Asynchronous decoder that yields runs as soon as they close, without
/// buffering the whole input.
///
/// Reads from any `AsyncRead` source (files, sockets, pipes). Like
/// [`decode_reader`](crate::decode_reader), every byte is one input
/// character. The source is only read when the caller awaits the next
/// run, and only as far as needed to close it.
///
/// ```text
///   Reading ──(run closed)──▶ Reading
///      │
///      └──(EOF: flush trailing run)──▶ Done
///      └──(read error)───────────────▶ Done
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use t9_decoder::{StreamingDecoder, TracingSink};
/// use tokio::io::AsyncRead;
///
/// async fn print_runs(reader: impl AsyncRead + Unpin) {
///     let mut stream = StreamingDecoder::new(reader, TracingSink);
///     while let Some(run) = stream.next().await.transpose().unwrap() {
///         println!("{} x{} -> {:?}", run.key, run.presses, run.letter);
///     }
/// }
/// ```
pub struct StreamingDecoder<R, S> {
    reader: R,
    decoder: T9Decoder<S>,
    state: StreamState,
    /// Bytes read from `reader` but not yet fed to the decoder live in
    /// `buf[pos..filled]`.
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
    Reading,
    Done,
}

impl<R: AsyncRead + Unpin, S: DiagnosticSink> StreamingDecoder<R, S> {
    #[must_use]
    pub fn new(reader: R, sink: S) -> Self {
        Self::with_config(reader, DecoderConfig::default(), sink)
    }

    #[must_use]
    pub fn with_config(reader: R, config: DecoderConfig, sink: S) -> Self {
        Self {
            reader,
            decoder: T9Decoder::with_config(config, sink),
            state: StreamState::Reading,
            buf: vec![0; READ_BUF_SIZE].into_boxed_slice(),
            pos: 0,
            filled: 0,
        }
    }

    /// Wait for the next closed run.
    ///
    /// Returns `Ok(Some(run))` per run, `None` once the source is
    /// exhausted and the trailing run has been yielded, or `Err` if the
    /// source fails. After an error the stream is finished.
    pub async fn next(&mut self) -> Option<Result<FlushedRun, DecodeError>> {
        if self.state == StreamState::Done {
            return None;
        }

        loop {
            while self.pos < self.filled {
                let c = char::from(self.buf[self.pos]);
                self.pos += 1;
                if let Some(run) = self.decoder.push(c) {
                    return Some(Ok(run));
                }
            }

            match self.reader.read(&mut self.buf).await {
                Ok(0) => {
                    self.state = StreamState::Done;
                    return self.decoder.finish().map(Ok);
                }
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.state = StreamState::Done;
                    return Some(Err(DecodeError::Io(e)));
                }
            }
        }
    }

    /// Drain the stream into a string.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Io`] if the source fails before end of input.
    pub async fn decode_to_string(&mut self) -> Result<String, DecodeError> {
        let mut decoded = String::new();
        while let Some(run) = self.next().await {
            decoded.push(run?.letter);
        }
        Ok(decoded)
    }

    pub fn into_sink(self) -> S {
        self.decoder.into_sink()
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use super::*;
    use crate::config::OverflowPolicy;
    use crate::diagnostic::{Diagnostic, IgnoreDiagnostics};
    use tokio::io::ReadBuf;

    /// Hands out one byte per read, so every run straddles reads.
    struct Trickle<'a>(&'a [u8]);

    impl AsyncRead for Trickle<'_> {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<std::io::Result<()>> {
            let remaining = self.0;
            if let Some((&first, rest)) = remaining.split_first() {
                buf.put_slice(&[first]);
                self.0 = rest;
            }
            Poll::Ready(Ok(()))
        }
    }

    /// Yields its bytes, then fails instead of reporting EOF.
    struct FailAfter<'a>(&'a [u8]);

    impl AsyncRead for FailAfter<'_> {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<std::io::Result<()>> {
            if self.0.is_empty() {
                return Poll::Ready(Err(std::io::Error::other("connection reset")));
            }
            let remaining = self.0;
            buf.put_slice(remaining);
            self.0 = &[];
            Poll::Ready(Ok(()))
        }
    }

    async fn collect<R: AsyncRead + Unpin>(reader: R) -> Vec<FlushedRun> {
        let mut stream = StreamingDecoder::new(reader, IgnoreDiagnostics);
        let mut runs = Vec::new();
        while let Some(run) = stream.next().await {
            runs.push(run.unwrap());
        }
        runs
    }

    #[tokio::test]
    async fn streaming_yields_one_run_per_letter() {
        let runs = collect(&b"44 444 44 444"[..]).await;
        let letters: String = runs.iter().map(|r| r.letter).collect();
        assert_eq!(letters, "hihi");

        let offsets: Vec<_> = runs.iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 3, 7, 10]);
    }

    #[tokio::test]
    async fn streaming_matches_sync_decoder() {
        let input = "2 22 222 0 3 33 333 0 7777 9999 0 1 *";
        let runs = collect(std::io::Cursor::new(input.as_bytes().to_vec())).await;
        let streamed: String = runs.iter().map(|r| r.letter).collect();
        assert_eq!(streamed, crate::decode(input));
    }

    #[tokio::test]
    async fn runs_spanning_reads_are_not_split() {
        let runs = collect(Trickle(b"7777 999")).await;
        let letters: String = runs.iter().map(|r| r.letter).collect();
        assert_eq!(letters, "sy");
    }

    #[tokio::test]
    async fn empty_source_yields_nothing() {
        assert!(collect(&b""[..]).await.is_empty());
        assert!(collect(&b"   "[..]).await.is_empty());
    }

    #[tokio::test]
    async fn stream_stays_done_after_eof() {
        let mut stream = StreamingDecoder::new(&b"2"[..], IgnoreDiagnostics);
        assert_eq!(stream.next().await.unwrap().unwrap().letter, 'a');
        assert!(stream.next().await.is_none());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn read_error_ends_the_stream() {
        let mut stream = StreamingDecoder::new(FailAfter(b"22 3"), IgnoreDiagnostics);
        assert_eq!(stream.next().await.unwrap().unwrap().letter, 'b');
        assert!(matches!(stream.next().await, Some(Err(DecodeError::Io(_)))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn diagnostics_reach_the_sink() {
        let mut stream = StreamingDecoder::with_config(
            &b"227*7 77777"[..],
            DecoderConfig::with_overflow(OverflowPolicy::Clamp),
            Vec::<Diagnostic>::new(),
        );
        let decoded = stream.decode_to_string().await.unwrap();
        assert_eq!(decoded, "bqs");

        let diagnostics = stream.into_sink();
        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics[0],
            Diagnostic::InvalidCharacter { character: '*', offset: 3 }
        ));
        assert!(matches!(
            diagnostics[1],
            Diagnostic::PressCountOverflow { presses: 5, offset: 6, .. }
        ));
    }
}
