use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::{debug, trace};

use crate::data::base_table;
use crate::error::EncodingError;
use crate::glyphs::{glyph_to_rune, rune_to_glyph};
use crate::registry;
use crate::transform::{Decoder, Encoder, transform_to_end};

/// A character code as it appears in a content stream.
///
/// Simple encodings only use `0..=255`; wider values are accepted by the
/// lookups and never match.
pub type CharCode = u32;

/// Per-code glyph overrides, as found in an `/Encoding` dictionary.
pub type Differences = BTreeMap<CharCode, String>;

const CUSTOM_ENCODING: &str = "custom";

/// A one byte encoding: a code to rune table and its inverse.
///
/// Instances are immutable. Applying differences yields a new encoder and
/// leaves the original untouched, so one encoder can back any number of
/// [`Decoder`]s and [`Encoder`]s at once.
#[derive(Clone, PartialEq, Eq)]
pub struct SimpleEncoder {
    base_name: String,
    decode: BTreeMap<u8, char>,
    encode: HashMap<char, u8>,
    differences: BTreeMap<u8, String>,
}

impl SimpleEncoder {
    /// Builds an encoder from a code to rune table.
    ///
    /// When several codes share a rune, the lowest code is used for encoding.
    pub fn from_table(name: &str, table: BTreeMap<u8, char>) -> SimpleEncoder {
        trace!("simple encoding {} with {} codes", name, table.len());
        let encode = invert(&table);
        SimpleEncoder {
            base_name: name.to_string(),
            decode: table,
            encode,
            differences: BTreeMap::new(),
        }
    }

    /// Builds an encoder from a code to glyph table plus differences.
    ///
    /// Glyphs that don't resolve to a rune are skipped. The resulting
    /// encoder is named `custom`.
    pub fn new_custom(
        table: &Differences,
        differences: &Differences,
    ) -> Result<SimpleEncoder, EncodingError> {
        if table.is_empty() {
            return Err(EncodingError::EmptyEncoding);
        }
        let mut base = BTreeMap::new();
        let mut glyphs = BTreeMap::new();
        for (&code, glyph) in table {
            let Some(code) = to_byte(code) else {
                debug!("custom encoding code {} out of range", code);
                continue;
            };
            match glyph_to_rune(glyph) {
                Some(rune) => {
                    base.insert(code, rune);
                    glyphs.insert(code, glyph.clone());
                }
                None => debug!("unknown glyph {:?} for code {}", glyph, code),
            }
        }
        let mut enc = SimpleEncoder::from_table(CUSTOM_ENCODING, base);
        // The custom table has no name to refer back to, keep its glyphs.
        enc.differences = glyphs;
        if !differences.is_empty() {
            enc = enc.apply_differences(differences);
        }
        Ok(enc)
    }

    /// Builds an encoder from a registered or predefined base encoding plus
    /// differences.
    pub fn new_named(
        base_name: &str,
        differences: &Differences,
    ) -> Result<SimpleEncoder, EncodingError> {
        let enc = if let Some(ctor) = registry::lookup(base_name) {
            ctor()
        } else if let Some(table) = base_table(base_name) {
            SimpleEncoder::from_table(base_name, table.iter().copied().collect())
        } else {
            debug!("unknown simple encoding {:?}", base_name);
            return Err(EncodingError::UnsupportedEncoding(base_name.to_string()));
        };
        if differences.is_empty() {
            return Ok(enc);
        }
        Ok(enc.apply_differences(differences))
    }

    /// Returns a new encoder with `differences` overriding the codes they
    /// name. The base name is kept.
    pub fn apply_differences(&self, differences: &Differences) -> SimpleEncoder {
        let mut decode = self.decode.clone();
        let mut applied = self.differences.clone();
        for (&code, glyph) in differences {
            let Some(code) = to_byte(code) else {
                debug!("differences code {} out of range", code);
                continue;
            };
            match glyph_to_rune(glyph) {
                Some(rune) => {
                    decode.insert(code, rune);
                    applied.insert(code, glyph.clone());
                }
                None => debug!("unknown glyph {:?} in differences for code {}", glyph, code),
            }
        }
        let encode = invert(&decode);
        SimpleEncoder {
            base_name: self.base_name.clone(),
            decode,
            encode,
            differences: applied,
        }
    }

    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    /// The PDF name of the base encoding, or `custom`.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Glyph overrides carried by this encoder, by code.
    pub fn differences(&self) -> &BTreeMap<u8, String> {
        &self.differences
    }

    /// All mapped codes in ascending order.
    pub fn charcodes(&self) -> Vec<CharCode> {
        self.decode.keys().map(|&b| CharCode::from(b)).collect()
    }

    /// Rune for `code`, or `None` when the code is unmapped or wider than a byte.
    pub fn charcode_to_rune(&self, code: CharCode) -> Option<char> {
        self.decode.get(&to_byte(code)?).copied()
    }

    /// Code that encodes `rune`. The lowest code wins when several share it.
    pub fn rune_to_charcode(&self, rune: char) -> Option<CharCode> {
        self.encode.get(&rune).map(|&b| CharCode::from(b))
    }

    /// Glyph list name for the rune at `code`.
    pub fn charcode_to_glyph(&self, code: CharCode) -> Option<&'static str> {
        rune_to_glyph(self.charcode_to_rune(code)?)
    }

    pub fn glyph_to_charcode(&self, glyph: &str) -> Option<CharCode> {
        self.rune_to_charcode(glyph_to_rune(glyph)?)
    }

    pub(crate) fn decode_byte(&self, code: u8) -> Option<char> {
        self.decode.get(&code).copied()
    }

    pub(crate) fn encode_rune(&self, rune: char) -> Option<u8> {
        self.encode.get(&rune).copied()
    }

    /// Streaming transform from encoded bytes to UTF-8.
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }

    /// Streaming transform from UTF-8 to encoded bytes.
    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(self)
    }

    /// Encodes a whole string, one byte per char.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        transform_to_end(&mut self.encoder(), text.as_bytes())
    }

    /// Decodes a whole byte string.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let utf8 = transform_to_end(&mut self.decoder(), bytes);
        // The decoder only ever writes whole UTF-8 sequences.
        String::from_utf8(utf8)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

impl fmt::Display for SimpleEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "simpleEncoding({})", self.base_name)
    }
}

impl fmt::Debug for SimpleEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleEncoder")
            .field("base_name", &self.base_name)
            .field("codes", &self.decode.len())
            .field("differences", &self.differences)
            .finish()
    }
}

fn to_byte(code: CharCode) -> Option<u8> {
    u8::try_from(code).ok()
}

fn invert(decode: &BTreeMap<u8, char>) -> HashMap<char, u8> {
    let mut encode = HashMap::with_capacity(decode.len());
    for (&code, &rune) in decode {
        encode.entry(rune).or_insert(code);
    }
    encode
}

/// Builder for configuring a [`SimpleEncoder`].
///
/// # Examples
///
/// ```
/// use pdf_textencoding::SimpleEncoder;
///
/// let enc = SimpleEncoder::builder()
///     .base_encoding("WinAnsiEncoding")
///     .difference(0x80, "bullet")
///     .build()?;
/// assert_eq!(enc.charcode_to_rune(0x80), Some('•'));
/// # Ok::<(), pdf_textencoding::EncodingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    base_encoding: Option<String>,
    custom_table: Option<Differences>,
    differences: Differences,
}

impl EncoderBuilder {
    /// Create a new builder based on `StandardEncoding`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the base encoding.
    pub fn base_encoding(mut self, name: impl Into<String>) -> Self {
        self.base_encoding = Some(name.into());
        self
    }

    /// Use a code to glyph table instead of a named base encoding.
    pub fn custom_table(mut self, table: Differences) -> Self {
        self.custom_table = Some(table);
        self
    }

    /// Override a single code. Later calls for the same code win.
    pub fn difference(mut self, code: CharCode, glyph: impl Into<String>) -> Self {
        self.differences.insert(code, glyph.into());
        self
    }

    pub fn differences<I, S>(mut self, differences: I) -> Self
    where
        I: IntoIterator<Item = (CharCode, S)>,
        S: Into<String>,
    {
        self.differences
            .extend(differences.into_iter().map(|(code, glyph)| (code, glyph.into())));
        self
    }

    /// Build the encoder.
    pub fn build(self) -> Result<SimpleEncoder, EncodingError> {
        if let Some(table) = self.custom_table {
            return SimpleEncoder::new_custom(&table, &self.differences);
        }
        let base = self.base_encoding.as_deref().unwrap_or("StandardEncoding");
        SimpleEncoder::new_named(base, &self.differences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::MISSING_CODE_RUNE;

    fn named(name: &str) -> SimpleEncoder {
        SimpleEncoder::new_named(name, &Differences::new()).unwrap()
    }

    #[test_log::test]
    fn mac_roman_adieresis() {
        let enc = named("MacRomanEncoding");
        assert_eq!(enc.charcode_to_rune(0x80), Some('\u{00C4}'));
        assert_eq!(enc.charcode_to_glyph(0x80), Some("Adieresis"));
    }

    #[test_log::test]
    fn standard_quoteright() {
        let enc = named("StandardEncoding");
        assert_eq!(enc.charcode_to_rune(0x27), Some('\u{2019}'));
        assert_eq!(enc.charcode_to_rune(0x01), None);
        // quotesingle sits at 0xa9.
        assert_eq!(enc.rune_to_charcode('\''), Some(0xa9));
        assert_eq!(enc.charcode_to_glyph(0xa9), Some("quotesingle"));
        assert_eq!(enc.charcode_to_glyph(0x60), Some("grave"));
    }

    #[test_log::test]
    fn wide_codes_never_match() {
        let enc = named("PdfDocEncoding");
        assert_eq!(enc.charcode_to_rune(0x141), None);
        assert_eq!(enc.charcode_to_glyph(u32::MAX), None);
    }

    #[test_log::test]
    fn empty_custom_encoding() {
        let err = SimpleEncoder::new_custom(&Differences::new(), &Differences::new()).unwrap_err();
        assert!(matches!(err, EncodingError::EmptyEncoding));
    }

    #[test_log::test]
    fn unsupported_encoding() {
        let err = SimpleEncoder::new_named("Bogus", &Differences::new()).unwrap_err();
        assert!(matches!(err, EncodingError::UnsupportedEncoding(name) if name == "Bogus"));
    }

    #[test_log::test]
    fn custom_skips_unknown_glyphs() {
        let table = Differences::from([
            (0x41, "A".to_string()),
            (0x42, "notaglyph".to_string()),
            (0x300, "C".to_string()),
        ]);
        let enc = SimpleEncoder::new_custom(&table, &Differences::new()).unwrap();
        assert_eq!(enc.base_name(), "custom");
        assert_eq!(enc.charcodes(), vec![0x41]);
        assert_eq!(enc.glyph_to_charcode("A"), Some(0x41));
        assert_eq!(enc.differences().get(&0x41).map(String::as_str), Some("A"));
    }

    #[test_log::test]
    fn custom_with_differences() {
        let table = Differences::from([(0x41, "A".to_string()), (0x42, "B".to_string())]);
        let diffs = Differences::from([(0x42, "Euro".to_string())]);
        let enc = SimpleEncoder::new_custom(&table, &diffs).unwrap();
        assert_eq!(enc.charcode_to_rune(0x42), Some('€'));
        assert_eq!(enc.rune_to_charcode('B'), None);
    }

    #[test_log::test]
    fn differences_leave_base_untouched() {
        let base = named("StandardEncoding");
        let diffs = Differences::from([
            (0x27, "quotesingle".to_string()),
            (0x01, "bullet".to_string()),
            (0x02, "nosuchglyph".to_string()),
        ]);
        let derived = base.apply_differences(&diffs);

        assert_eq!(derived.base_name(), "StandardEncoding");
        assert_eq!(derived.charcode_to_rune(0x27), Some('\''));
        assert_eq!(derived.charcode_to_rune(0x01), Some('•'));
        assert_eq!(derived.charcode_to_rune(0x02), None);
        assert_eq!(derived.rune_to_charcode('\u{2019}'), None);

        assert_eq!(base.charcode_to_rune(0x27), Some('\u{2019}'));
        assert_eq!(base.charcode_to_rune(0x01), None);
        assert_eq!(base.rune_to_charcode('\u{2019}'), Some(0x27));
        assert!(base.differences().is_empty());
        assert_eq!(derived.differences().len(), 2);
    }

    #[test_log::test]
    fn full_glyph_list_overrides() {
        let diffs = Differences::from([
            (0x41, "Omega".to_string()),
            (0x42, "alpha".to_string()),
            (0x43, "afii10017".to_string()),
            (0x44, "a1".to_string()),
        ]);
        let enc = SimpleEncoder::new_named("StandardEncoding", &diffs).unwrap();
        assert_eq!(enc.charcode_to_rune(0x41), Some('\u{2126}'));
        assert_eq!(enc.charcode_to_rune(0x42), Some('α'));
        assert_eq!(enc.charcode_to_rune(0x43), Some('А'));
        assert_eq!(enc.charcode_to_rune(0x44), Some('\u{2701}'));
        assert_eq!(enc.rune_to_charcode('A'), None);
        assert_eq!(enc.decode(b"ABCD"), "\u{2126}αА\u{2701}");
    }

    #[test_log::test]
    fn lowest_code_wins_shared_rune() {
        let table = BTreeMap::from([(0x10, 'x'), (0x05, 'x'), (0x20, 'y')]);
        let enc = SimpleEncoder::from_table("Test", table);
        assert_eq!(enc.rune_to_charcode('x'), Some(0x05));
        assert_eq!(enc.charcode_to_rune(0x10), Some('x'));
    }

    #[test_log::test]
    fn difference_to_shared_rune_keeps_lowest_code() {
        // 0xb7 is already the bullet in StandardEncoding.
        let enc = named("StandardEncoding")
            .apply_differences(&Differences::from([(0xfe, "bullet".to_string())]));
        assert_eq!(enc.rune_to_charcode('•'), Some(0xb7));
    }

    #[test_log::test]
    fn charcodes_ascending() {
        let enc = named("MacExpertEncoding");
        let codes = enc.charcodes();
        assert_eq!(codes.len(), 165);
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test_log::test]
    fn whole_buffer_helpers() {
        let enc = named("MacRomanEncoding");
        assert_eq!(enc.decode(&[0x80, 0x81, 0x41]), "ÄÅA");
        assert_eq!(enc.encode("ÄÅA"), vec![0x80, 0x81, 0x41]);
        assert_eq!(enc.decode(&[0x00]), MISSING_CODE_RUNE.to_string());
    }

    #[test_log::test]
    fn builder_defaults_to_standard() {
        let enc = EncoderBuilder::new().build().unwrap();
        assert_eq!(enc.base_name(), "StandardEncoding");
    }

    #[test_log::test]
    fn builder_custom_table_wins() {
        let enc = SimpleEncoder::builder()
            .base_encoding("MacRomanEncoding")
            .custom_table(Differences::from([(0x20, "space".to_string())]))
            .differences([(0x21, "exclam")])
            .build()
            .unwrap();
        assert_eq!(enc.base_name(), "custom");
        assert_eq!(enc.charcodes(), vec![0x20, 0x21]);
    }

    #[test_log::test]
    fn display_names_the_base() {
        assert_eq!(named("PdfDocEncoding").to_string(), "simpleEncoding(PdfDocEncoding)");
    }
}
