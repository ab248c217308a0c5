//! [`std::io::Read`] and [`std::io::Write`] wrappers around a [`Transformer`].
//!
//! ```
//! use std::io::prelude::*;
//!
//! use pdf_textencoding::{Differences, SimpleEncoder, TransformReader, TransformWriter};
//!
//! let mac = SimpleEncoder::new_named("MacRomanEncoding", &Differences::new())?;
//!
//! let mut text = String::new();
//! TransformReader::new(&[0x80, 0x81][..], mac.decoder()).read_to_string(&mut text)?;
//! assert_eq!(text, "ÄÅ");
//!
//! let mut writer = TransformWriter::new(Vec::new(), mac.encoder());
//! write!(writer, "{}", text)?;
//! assert_eq!(writer.finish()?, vec![0x80, 0x81]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{self, Read, Write};

use tracing::debug;

use crate::transform::{TransformStatus, Transformer};

const BUFFER_SIZE: usize = 4096;

fn no_progress() -> io::Error {
    io::Error::other("transform made no progress")
}

/// Reads the transformed contents of an inner reader.
pub struct TransformReader<R, T> {
    inner: R,
    transformer: T,
    src: Vec<u8>,
    src_pos: usize,
    out: Box<[u8]>,
    out_pos: usize,
    out_len: usize,
    eof: bool,
}

impl<R: Read, T: Transformer> TransformReader<R, T> {
    pub fn new(inner: R, transformer: T) -> Self {
        TransformReader {
            inner,
            transformer,
            src: Vec::with_capacity(BUFFER_SIZE),
            src_pos: 0,
            out: vec![0; BUFFER_SIZE].into_boxed_slice(),
            out_pos: 0,
            out_len: 0,
            eof: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self) -> io::Result<()> {
        self.src.drain(..self.src_pos);
        self.src_pos = 0;
        let start = self.src.len();
        self.src.resize(start + BUFFER_SIZE, 0);
        let n = loop {
            match self.inner.read(&mut self.src[start..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.src.truncate(start);
                    return Err(e);
                }
            }
        };
        self.src.truncate(start + n);
        if n == 0 {
            self.eof = true;
        }
        Ok(())
    }
}

impl<R: Read, T: Transformer> Read for TransformReader<R, T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.out_pos < self.out_len {
                let n = buf.len().min(self.out_len - self.out_pos);
                buf[..n].copy_from_slice(&self.out[self.out_pos..self.out_pos + n]);
                self.out_pos += n;
                return Ok(n);
            }
            let pending = &self.src[self.src_pos..];
            if !pending.is_empty() {
                let step = self.transformer.transform(&mut self.out, pending, self.eof);
                self.src_pos += step.consumed;
                self.out_pos = 0;
                self.out_len = step.written;
                if step.written > 0 {
                    continue;
                }
                if step.status == TransformStatus::ShortDestination {
                    return Err(no_progress());
                }
            }
            if self.eof {
                return Ok(0);
            }
            self.fill()?;
        }
    }
}

/// Transforms everything written to it into an inner writer.
///
/// An incomplete character at the end of a write is held back until the
/// next write or [`TransformWriter::finish`]. Transformed bytes the inner
/// writer did not take are retried first on the next call, so an error is
/// only returned for input that was not accepted.
pub struct TransformWriter<W, T> {
    inner: W,
    transformer: T,
    pending: Vec<u8>,
    out: Vec<u8>,
}

impl<W: Write, T: Transformer> TransformWriter<W, T> {
    pub fn new(inner: W, transformer: T) -> Self {
        TransformWriter {
            inner,
            transformer,
            pending: Vec::new(),
            out: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Transforms any held back input as final and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.transform_pending(true)?;
        self.write_out()?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Moves as much of `pending` as the transformer accepts into `out`.
    /// On error `pending` is left as it was.
    fn transform_pending(&mut self, at_eof: bool) -> io::Result<()> {
        let mut pos = 0;
        loop {
            let start = self.out.len();
            self.out.resize(start + BUFFER_SIZE, 0);
            let step = self
                .transformer
                .transform(&mut self.out[start..], &self.pending[pos..], at_eof);
            self.out.truncate(start + step.written);
            pos += step.consumed;
            match step.status {
                TransformStatus::ShortDestination if step.written > 0 || step.consumed > 0 => {}
                TransformStatus::ShortDestination => return Err(no_progress()),
                TransformStatus::Done | TransformStatus::ShortSource => break,
            }
        }
        self.pending.drain(..pos);
        Ok(())
    }

    fn write_out(&mut self) -> io::Result<()> {
        let mut written = 0;
        let result = loop {
            if written == self.out.len() {
                break Ok(());
            }
            match self.inner.write(&self.out[written..]) {
                Ok(0) => break Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };
        self.out.drain(..written);
        result
    }
}

impl<W: Write, T: Transformer> Write for TransformWriter<W, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_out()?;
        let (pending_len, out_len) = (self.pending.len(), self.out.len());
        self.pending.extend_from_slice(buf);
        if let Err(e) = self.transform_pending(false) {
            self.pending.truncate(pending_len);
            self.out.truncate(out_len);
            return Err(e);
        }
        // `buf` is accepted at this point. A failed write leaves the bytes in
        // `out` and the error is seen again by the next call.
        if let Err(e) = self.write_out() {
            debug!("deferring inner write error: {}", e);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_out()?;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{Differences, SimpleEncoder};

    fn mac_roman() -> SimpleEncoder {
        SimpleEncoder::new_named("MacRomanEncoding", &Differences::new()).unwrap()
    }

    /// Hands out at most one byte per read.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match (self.0.split_first(), buf.first_mut()) {
                (Some((&b, rest)), Some(slot)) => {
                    *slot = b;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test_log::test]
    fn read_with_one_byte_buffer() {
        let enc = mac_roman();
        let mut reader = TransformReader::new(&[0x41, 0x80, 0x81][..], enc.decoder());
        let mut out = Vec::new();
        let mut byte = [0u8; 1];
        while reader.read(&mut byte).unwrap() == 1 {
            out.push(byte[0]);
        }
        assert_eq!(String::from_utf8(out).unwrap(), "AÄÅ");
    }

    #[test_log::test]
    fn encode_from_trickling_reader() {
        let enc = mac_roman();
        let text = "Ä€ЖÅ";
        let mut reader = TransformReader::new(Trickle(text.as_bytes()), enc.encoder());
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        // No code for Cyrillic in MacRoman.
        assert_eq!(out, vec![0x80, 0xdb, 0x00, 0x81]);
    }

    #[test_log::test]
    fn writer_holds_back_partial_rune() {
        let enc = mac_roman();
        let bytes = "AÄ".as_bytes();
        let mut writer = TransformWriter::new(Vec::new(), enc.encoder());
        writer.write_all(&bytes[..2]).unwrap();
        assert_eq!(writer.get_ref(), &vec![0x41]);
        writer.write_all(&bytes[2..]).unwrap();
        assert_eq!(writer.finish().unwrap(), vec![0x41, 0x80]);
    }

    #[test_log::test]
    fn finish_flushes_truncated_input() {
        let enc = mac_roman();
        let mut writer = TransformWriter::new(Vec::new(), enc.encoder());
        writer.write_all(&[0x41, 0xe2, 0x82]).unwrap();
        assert_eq!(writer.finish().unwrap(), vec![0x41, 0x00, 0x00]);
    }

    /// Rejects every write while `down` is set.
    #[derive(Default)]
    struct Sink {
        down: bool,
        data: Vec<u8>,
    }

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.down {
                return Err(io::Error::other("sink down"));
            }
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test_log::test]
    fn inner_write_error_is_not_duplicated() {
        let enc = mac_roman();
        let sink = Sink {
            down: true,
            ..Default::default()
        };
        let mut writer = TransformWriter::new(sink, enc.encoder());

        // Accepted and held, the failure is reported by the next call.
        assert_eq!(writer.write(b"AB").unwrap(), 2);
        assert!(writer.write(b"C").is_err());
        assert!(writer.flush().is_err());

        writer.get_mut().down = false;
        assert_eq!(writer.write(b"C").unwrap(), 1);
        writer.write_all("Ä".as_bytes()).unwrap();
        assert_eq!(writer.finish().unwrap().data, b"ABC\x80");
    }

    #[test_log::test]
    fn large_input_spans_buffers() {
        let enc = mac_roman();
        let src: Vec<u8> = (0..3 * BUFFER_SIZE).map(|i| 0x80 + (i % 2) as u8).collect();
        let mut text = String::new();
        TransformReader::new(&src[..], enc.decoder())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text.chars().count(), src.len());
        assert_eq!(enc.encode(&text), src);
    }
}
