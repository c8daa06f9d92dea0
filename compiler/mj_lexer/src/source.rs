//! Streaming character sources.
//!
//! The lexer never sees the whole input at once: it pulls chars through
//! [`CharSource::read_chars`] whenever its buffer runs dry. Two sources are
//! provided: [`StrSource`] over an in-memory `&str`, and [`ReaderSource`],
//! which decodes UTF-8 from any [`io::Read`] incrementally.

use std::io::{self, Read};
use std::str::Chars;

/// Blocking, pull-based provider of `char`s.
pub trait CharSource {
    /// Fill a prefix of `buf` with the next characters of the input.
    ///
    /// Returns the number of chars written. `Ok(0)` for a non-empty `buf`
    /// means the input is exhausted; the lexer will not call again until it
    /// is reset.
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read_chars(buf)
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        (**self).read_chars(buf)
    }
}

/// Source over a borrowed string. Never fails.
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl CharSource for StrSource<'_> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        let mut n = 0;
        for (slot, c) in buf.iter_mut().zip(&mut self.chars) {
            *slot = c;
            n += 1;
        }
        Ok(n)
    }
}

/// Size of the byte chunk read from the underlying reader per refill.
const READ_CHUNK: usize = 8 * 1024;

/// Incremental UTF-8 decoder over an [`io::Read`].
///
/// Multi-byte sequences split across reads are carried over to the next
/// chunk. Malformed sequences decode to U+FFFD, the same way a lossy reader
/// would. `ErrorKind::Interrupted` is retried here; every other I/O error is
/// returned unchanged.
pub struct ReaderSource<R> {
    reader: R,
    /// Raw bytes read but not yet decoded.
    bytes: Vec<u8>,
    /// Decoded chars not yet handed out.
    pending: Vec<char>,
    /// Read cursor into `pending`.
    pending_pos: usize,
    reader_done: bool,
    chunk: usize,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, READ_CHUNK)
    }

    /// Use a custom byte chunk size (minimum 1). Small chunks are mostly
    /// useful to exercise sequences split across reads.
    pub fn with_chunk_size(reader: R, chunk: usize) -> Self {
        Self {
            reader,
            bytes: Vec::new(),
            pending: Vec::new(),
            pending_pos: 0,
            reader_done: false,
            chunk: chunk.max(1),
        }
    }

    /// Consume the source, returning the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read one chunk and decode whatever complete sequences it yields.
    fn fill_pending(&mut self) -> io::Result<()> {
        self.pending.clear();
        self.pending_pos = 0;

        while self.pending.is_empty() && !(self.reader_done && self.bytes.is_empty()) {
            if !self.reader_done {
                let old_len = self.bytes.len();
                self.bytes.resize(old_len + self.chunk, 0);
                let n = loop {
                    match self.reader.read(&mut self.bytes[old_len..]) {
                        Ok(n) => break n,
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                        Err(e) => {
                            self.bytes.truncate(old_len);
                            return Err(e);
                        }
                    }
                };
                self.bytes.truncate(old_len + n);
                if n == 0 {
                    self.reader_done = true;
                }
            }
            self.decode();
        }
        Ok(())
    }

    /// Move every decodable byte from `bytes` into `pending`.
    ///
    /// An incomplete trailing sequence stays in `bytes` unless the reader is
    /// exhausted, in which case it becomes a single U+FFFD.
    fn decode(&mut self) {
        let mut consumed = 0;
        loop {
            match std::str::from_utf8(&self.bytes[consumed..]) {
                Ok(valid) => {
                    self.pending.extend(valid.chars());
                    consumed = self.bytes.len();
                    break;
                }
                Err(err) => {
                    let valid_up_to = consumed + err.valid_up_to();
                    if let Ok(valid) = std::str::from_utf8(&self.bytes[consumed..valid_up_to]) {
                        self.pending.extend(valid.chars());
                    }
                    match err.error_len() {
                        Some(bad) => {
                            self.pending.push(char::REPLACEMENT_CHARACTER);
                            consumed = valid_up_to + bad;
                        }
                        None if self.reader_done => {
                            self.pending.push(char::REPLACEMENT_CHARACTER);
                            consumed = self.bytes.len();
                            break;
                        }
                        None => {
                            consumed = valid_up_to;
                            break;
                        }
                    }
                }
            }
        }
        self.bytes.drain(..consumed);
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn read_chars(&mut self, buf: &mut [char]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.pending_pos == self.pending.len() {
            self.fill_pending()?;
        }
        let available = &self.pending[self.pending_pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pending_pos += n;
        Ok(n)
    }
}

impl<R> std::fmt::Debug for ReaderSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderSource")
            .field("buffered_bytes", &self.bytes.len())
            .field("pending_chars", &(self.pending.len() - self.pending_pos))
            .field("reader_done", &self.reader_done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
