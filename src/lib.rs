//! Single-byte PDF font encodings
//!
//! This library maps the character codes of simple fonts to Unicode and
//! back. It provides the predefined base encodings, custom and
//! `/Differences`-derived encodings built from glyph names, chunked
//! transcoding with explicit short-buffer signalling, and conversion to and
//! from `/Encoding` objects.
//!
//! ```
//! use pdf_textencoding::{Differences, SimpleEncoder};
//!
//! let enc = SimpleEncoder::new_named(
//!     "StandardEncoding",
//!     &Differences::from([(0x27, "quotesingle".to_string())]),
//! )?;
//! assert_eq!(enc.decode(b"it's"), "it's");
//! assert_eq!(enc.charcode_to_glyph(0x27), Some("quotesingle"));
//! // 0xa9 also holds quotesingle; the lower code is used for encoding.
//! assert_eq!(enc.encode("'"), vec![0x27]);
//! # Ok::<(), pdf_textencoding::EncodingError>(())
//! ```

mod data;
mod encoder;
mod error;
mod glyphs;
mod io;
mod pdf;
pub mod registry;
mod text;
mod transform;

// Re-export error type
pub use error::EncodingError;

// Re-export encoding API
pub use encoder::{CharCode, Differences, EncoderBuilder, SimpleEncoder};
pub use glyphs::{MISSING_CODE_RUNE, glyph_to_rune, rune_to_glyph};
pub use pdf::{differences_from_array, differences_to_array};
pub use text::{decode_text_string, encode_text_string};

// Re-export streaming API
pub use io::{TransformReader, TransformWriter};
pub use transform::{Decoder, Encoder, TransformStatus, Transformed, Transformer, transform_to_end};
