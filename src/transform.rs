//! Chunked transcoding between encoded bytes and UTF-8.
//!
//! A transform call converts as much of `src` into `dst` as it can and
//! reports how far it got. [`TransformStatus::ShortDestination`] asks the
//! caller for more output room, [`TransformStatus::ShortSource`] for more
//! input; in both cases the caller resumes with the unconsumed part of
//! `src`. Neither is an error.

use crate::encoder::SimpleEncoder;
use crate::glyphs::MISSING_CODE_RUNE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStatus {
    /// All of `src` was consumed.
    Done,
    /// `src` ends in the middle of a character and more input may follow.
    ShortSource,
    /// The next character does not fit in the remaining `dst`.
    ShortDestination,
}

/// Outcome of one [`Transformer::transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformed {
    pub consumed: usize,
    pub written: usize,
    pub status: TransformStatus,
}

impl Transformed {
    fn new(consumed: usize, written: usize, status: TransformStatus) -> Self {
        Transformed {
            consumed,
            written,
            status,
        }
    }
}

pub trait Transformer {
    /// Converts a prefix of `src` into `dst`. `at_eof` tells whether `src`
    /// holds the last of the input.
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed;

    /// Clears any state carried between calls.
    fn reset(&mut self) {}
}

impl<T: Transformer + ?Sized> Transformer for &mut T {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed {
        (**self).transform(dst, src, at_eof)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Decodes encoded bytes to UTF-8. Unmapped codes become
/// [`MISSING_CODE_RUNE`].
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    encoding: &'a SimpleEncoder,
}

impl<'a> Decoder<'a> {
    pub fn new(encoding: &'a SimpleEncoder) -> Self {
        Decoder { encoding }
    }
}

impl Transformer for Decoder<'_> {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], _at_eof: bool) -> Transformed {
        let mut written = 0;
        for (consumed, &code) in src.iter().enumerate() {
            let rune = self.encoding.decode_byte(code).unwrap_or(MISSING_CODE_RUNE);
            let len = rune.len_utf8();
            if len > dst.len() - written {
                return Transformed::new(consumed, written, TransformStatus::ShortDestination);
            }
            rune.encode_utf8(&mut dst[written..written + len]);
            written += len;
        }
        Transformed::new(src.len(), written, TransformStatus::Done)
    }
}

/// Encodes UTF-8 to one byte per char.
///
/// Invalid UTF-8 is read as [`MISSING_CODE_RUNE`], one byte at a time. A
/// rune without a code is written as the code of [`MISSING_CODE_RUNE`] if
/// the encoding maps one, else as `0x00`.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    encoding: &'a SimpleEncoder,
}

impl<'a> Encoder<'a> {
    pub fn new(encoding: &'a SimpleEncoder) -> Self {
        Encoder { encoding }
    }

    fn code_for(&self, rune: char) -> u8 {
        self.encoding
            .encode_rune(rune)
            .or_else(|| self.encoding.encode_rune(MISSING_CODE_RUNE))
            .unwrap_or(0)
    }
}

impl Transformer for Encoder<'_> {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed {
        let mut consumed = 0;
        let mut written = 0;
        while consumed < src.len() {
            let step = next_rune(&src[consumed..]);
            if step == Utf8Step::Incomplete && !at_eof {
                return Transformed::new(consumed, written, TransformStatus::ShortSource);
            }
            if written == dst.len() {
                return Transformed::new(consumed, written, TransformStatus::ShortDestination);
            }
            let (rune, len) = match step {
                Utf8Step::Rune(rune, len) => (rune, len),
                Utf8Step::Invalid | Utf8Step::Incomplete => (MISSING_CODE_RUNE, 1),
            };
            dst[written] = self.code_for(rune);
            consumed += len;
            written += 1;
        }
        Transformed::new(consumed, written, TransformStatus::Done)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Utf8Step {
    Rune(char, usize),
    /// A valid prefix of a sequence that continues past the end of input.
    Incomplete,
    Invalid,
}

/// Reads the UTF-8 sequence at the start of a non-empty `src`.
fn next_rune(src: &[u8]) -> Utf8Step {
    let lead = src[0];
    let (width, second) = match lead {
        0x00..=0x7f => return Utf8Step::Rune(char::from(lead), 1),
        0xc2..=0xdf => (2, 0x80..=0xbf),
        0xe0 => (3, 0xa0..=0xbf),
        0xed => (3, 0x80..=0x9f),
        0xe1..=0xef => (3, 0x80..=0xbf),
        0xf0 => (4, 0x90..=0xbf),
        0xf4 => (4, 0x80..=0x8f),
        0xf1..=0xf3 => (4, 0x80..=0xbf),
        _ => return Utf8Step::Invalid,
    };
    let available = src.len().min(width);
    for (i, &b) in src[1..available].iter().enumerate() {
        let valid = if i == 0 {
            second.contains(&b)
        } else {
            (0x80..=0xbf).contains(&b)
        };
        if !valid {
            return Utf8Step::Invalid;
        }
    }
    if available < width {
        return Utf8Step::Incomplete;
    }
    match std::str::from_utf8(&src[..width])
        .ok()
        .and_then(|s| s.chars().next())
    {
        Some(rune) => Utf8Step::Rune(rune, width),
        None => Utf8Step::Invalid,
    }
}

/// Runs `transformer` over the whole of `src` as final input.
pub fn transform_to_end<T: Transformer + ?Sized>(transformer: &mut T, mut src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    let mut buf = [0u8; 256];
    loop {
        let step = transformer.transform(&mut buf, src, true);
        out.extend_from_slice(&buf[..step.written]);
        src = &src[step.consumed..];
        match step.status {
            TransformStatus::ShortDestination if step.consumed > 0 => {}
            _ => return out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Differences;

    fn named(name: &str) -> SimpleEncoder {
        SimpleEncoder::new_named(name, &Differences::new()).unwrap()
    }

    #[test_log::test]
    fn decode_short_destination() {
        let enc = named("MacRomanEncoding");
        let mut dec = enc.decoder();
        let src = [0x80, 0x81];

        let mut small = [0u8; 1];
        let step = dec.transform(&mut small, &src, true);
        assert_eq!(step, Transformed::new(0, 0, TransformStatus::ShortDestination));

        let mut big = [0u8; 4];
        let step = dec.transform(&mut big, &src, true);
        assert_eq!(step, Transformed::new(2, 4, TransformStatus::Done));
        assert_eq!(std::str::from_utf8(&big).unwrap(), "ÄÅ");
    }

    #[test_log::test]
    fn decode_stops_mid_buffer() {
        let enc = named("MacRomanEncoding");
        let mut dst = [0u8; 3];
        let step = enc.decoder().transform(&mut dst, &[0x41, 0x80, 0x81], false);
        assert_eq!(step, Transformed::new(2, 3, TransformStatus::ShortDestination));
        assert_eq!(&dst, "AÄ".as_bytes());
    }

    #[test_log::test]
    fn decode_unmapped_is_missing_rune() {
        let enc = named("StandardEncoding");
        let mut dst = [0u8; 8];
        let step = enc.decoder().transform(&mut dst, &[0x01, 0x41], true);
        assert_eq!(step.status, TransformStatus::Done);
        assert_eq!(&dst[..step.written], "\u{FFFD}A".as_bytes());
    }

    #[test_log::test]
    fn encode_short_source_then_resume() {
        let enc = named("MacRomanEncoding");
        let text = "AÄ".as_bytes();
        let mut dst = [0u8; 4];
        let mut e = enc.encoder();

        let step = e.transform(&mut dst, &text[..2], false);
        assert_eq!(step, Transformed::new(1, 1, TransformStatus::ShortSource));

        let step = e.transform(&mut dst[1..], &text[1..], false);
        assert_eq!(step, Transformed::new(2, 1, TransformStatus::Done));
        assert_eq!(&dst[..2], &[0x41, 0x80]);
    }

    #[test_log::test]
    fn encode_short_destination() {
        let enc = named("MacRomanEncoding");
        let mut dst = [0u8; 1];
        let step = enc.encoder().transform(&mut dst, "ÄÅ".as_bytes(), true);
        assert_eq!(step, Transformed::new(2, 1, TransformStatus::ShortDestination));
        assert_eq!(dst[0], 0x80);

        let mut empty = [0u8; 0];
        let step = enc.encoder().transform(&mut empty, "Å".as_bytes(), true);
        assert_eq!(step, Transformed::new(0, 0, TransformStatus::ShortDestination));
    }

    #[test_log::test]
    fn encode_truncated_at_eof_is_missing() {
        let enc = named("MacRomanEncoding");
        let mut dst = [0xffu8; 4];
        let step = enc.encoder().transform(&mut dst, &[0x41, 0xc3], true);
        assert_eq!(step, Transformed::new(2, 2, TransformStatus::Done));
        // No code for the missing rune in MacRoman, so NUL.
        assert_eq!(&dst[..2], &[0x41, 0x00]);
    }

    #[test_log::test]
    fn encode_invalid_bytes_one_at_a_time() {
        let enc = named("StandardEncoding")
            .apply_differences(&Differences::from([(0x3f, ".notdef".to_string())]));
        let mut dst = [0u8; 8];
        let step = enc.encoder().transform(&mut dst, &[0xe2, 0x28, 0xa1, 0x41], false);
        assert_eq!(step.status, TransformStatus::Done);
        assert_eq!(&dst[..step.written], &[0x3f, 0x28, 0x3f, 0x41]);
    }

    #[test_log::test]
    fn encode_unmapped_uses_notdef_code() {
        let enc = named("MacRomanEncoding")
            .apply_differences(&Differences::from([(0x00, ".notdef".to_string())]));
        assert_eq!(enc.encode("A\u{1F600}"), vec![0x41, 0x00]);

        let enc = named("WinAnsiEncoding")
            .apply_differences(&Differences::from([(0x7f, ".notdef".to_string())]));
        assert_eq!(enc.encode("Ω"), vec![0x7f]);
    }

    #[test]
    fn next_rune_classification() {
        assert_eq!(next_rune(b"a"), Utf8Step::Rune('a', 1));
        assert_eq!(next_rune("€".as_bytes()), Utf8Step::Rune('€', 3));
        assert_eq!(next_rune(&[0xe2, 0x82]), Utf8Step::Incomplete);
        assert_eq!(next_rune(&[0xed, 0xa0, 0x80]), Utf8Step::Invalid);
        assert_eq!(next_rune(&[0xc0, 0x80]), Utf8Step::Invalid);
        assert_eq!(next_rune(&[0xf4, 0x90, 0x80, 0x80]), Utf8Step::Invalid);
        assert_eq!(next_rune(&[0x80]), Utf8Step::Invalid);
    }

    #[test]
    fn reset_is_a_no_op() {
        let enc = named("PdfDocEncoding");
        let mut dec = enc.decoder();
        dec.reset();
        assert_eq!(transform_to_end(&mut dec, b"ok"), b"ok");
    }
}
