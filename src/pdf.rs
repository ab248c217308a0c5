//! Conversion between [`SimpleEncoder`] and `/Encoding` objects.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object};
use tracing::debug;

use crate::encoder::{CharCode, Differences, SimpleEncoder};
use crate::error::EncodingError;

/// Encodings a conforming reader knows by name alone.
const INTRINSIC_ENCODINGS: &[&str] = &["MacRomanEncoding", "MacExpertEncoding", "WinAnsiEncoding"];

/// A dictionary without `/BaseEncoding` differs from the font's built-in
/// encoding; for a simple font that is taken to be StandardEncoding.
const DEFAULT_BASE_ENCODING: &str = "StandardEncoding";

const CUSTOM_ENCODING: &str = "custom";

impl SimpleEncoder {
    /// Renders the encoder as the value of a font's `/Encoding` entry.
    ///
    /// An intrinsic encoding without overrides is written as a bare name.
    /// Anything else becomes an indirect `/Encoding` dictionary in `doc`,
    /// and a reference to it is returned.
    pub fn to_pdf_object(&self, doc: &mut Document) -> Object {
        if self.differences().is_empty() && INTRINSIC_ENCODINGS.contains(&self.base_name()) {
            return Object::Name(self.base_name().as_bytes().to_vec());
        }
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"Encoding".to_vec()));
        dict.set("BaseEncoding", Object::Name(self.base_name().as_bytes().to_vec()));
        dict.set("Differences", Object::Array(differences_to_array(self.differences())));
        Object::Reference(doc.add_object(dict))
    }

    /// Builds an encoder from the value of a font's `/Encoding` entry.
    pub fn from_pdf_object(doc: &Document, obj: &Object) -> Result<SimpleEncoder, EncodingError> {
        match deref(doc, obj)? {
            Object::Name(name) => {
                SimpleEncoder::new_named(&String::from_utf8_lossy(name), &Differences::new())
            }
            Object::Dictionary(dict) => from_encoding_dict(doc, dict),
            Object::Stream(_) => Err(EncodingError::InvalidObject(
                "CMap streams are not simple encodings".to_string(),
            )),
            other => Err(EncodingError::InvalidObject(format!("{other:?}"))),
        }
    }
}

fn from_encoding_dict(doc: &Document, dict: &Dictionary) -> Result<SimpleEncoder, EncodingError> {
    let differences = match dict.get(b"Differences") {
        Ok(array) => match deref(doc, array)? {
            Object::Array(items) => differences_from_array(doc, items)?,
            other => {
                return Err(EncodingError::InvalidDifferences(format!(
                    "expected array, found {other:?}"
                )));
            }
        },
        Err(_) => Differences::new(),
    };
    let base = match dict.get(b"BaseEncoding") {
        Ok(base) => match deref(doc, base)? {
            Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
            other => return Err(EncodingError::InvalidObject(format!("{other:?}"))),
        },
        Err(_) => DEFAULT_BASE_ENCODING.to_string(),
    };
    debug!("BaseEncoding {} with {} differences", base, differences.len());
    if base == CUSTOM_ENCODING {
        return SimpleEncoder::new_custom(&differences, &Differences::new());
    }
    SimpleEncoder::new_named(&base, &differences)
}

/// Writes overrides in `/Differences` form: each run of consecutive codes is
/// a starting code followed by one glyph name per code.
pub fn differences_to_array(differences: &BTreeMap<u8, String>) -> Vec<Object> {
    let mut array = Vec::new();
    let mut next: Option<u8> = None;
    for (&code, glyph) in differences {
        if next != Some(code) {
            array.push(Object::Integer(i64::from(code)));
        }
        array.push(Object::Name(glyph.as_bytes().to_vec()));
        next = code.checked_add(1);
    }
    array
}

/// Reads a `/Differences` array into per-code glyph names.
///
/// Names that run past code 255 are dropped. A starting code outside the
/// byte range is an error.
pub fn differences_from_array(doc: &Document, array: &[Object]) -> Result<Differences, EncodingError> {
    let mut differences = Differences::new();
    let mut code: Option<CharCode> = None;
    for item in array {
        match deref(doc, item)? {
            &Object::Integer(i) => {
                let start = u8::try_from(i).map_err(|_| {
                    EncodingError::InvalidDifferences(format!("code {i} out of range"))
                })?;
                code = Some(CharCode::from(start));
            }
            Object::Name(name) => {
                let current = code.ok_or_else(|| {
                    EncodingError::InvalidDifferences("glyph name before first code".to_string())
                })?;
                let glyph = String::from_utf8_lossy(name);
                if current > 0xff {
                    debug!("Differences: {} runs past code 255, skipped", glyph);
                } else {
                    differences.insert(current, glyph.into_owned());
                }
                code = Some(current + 1);
            }
            other => {
                return Err(EncodingError::InvalidDifferences(format!(
                    "unexpected {other:?}"
                )));
            }
        }
    }
    Ok(differences)
}

fn deref<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object, EncodingError> {
    match obj {
        &Object::Reference(id) => Ok(doc.get_object(id)?),
        _ => Ok(obj),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Object {
        Object::Name(s.as_bytes().to_vec())
    }

    fn render(obj: &Object) -> String {
        match obj {
            Object::Name(n) => format!("/{}", String::from_utf8_lossy(n)),
            Object::Integer(i) => i.to_string(),
            Object::Array(items) => {
                let items: Vec<_> = items.iter().map(render).collect();
                format!("[{}]", items.join(" "))
            }
            other => format!("{other:?}"),
        }
    }

    fn encoding_dict(doc: &Document, obj: &Object) -> Dictionary {
        let Object::Reference(id) = obj else {
            panic!("expected a reference, found {obj:?}");
        };
        doc.get_object(*id).unwrap().as_dict().unwrap().clone()
    }

    #[test_log::test]
    fn intrinsic_encoding_is_a_name() {
        let mut doc = Document::new();
        let enc = SimpleEncoder::new_named("WinAnsiEncoding", &Differences::new()).unwrap();
        assert_eq!(render(&enc.to_pdf_object(&mut doc)), "/WinAnsiEncoding");
        assert!(doc.objects.is_empty());
    }

    #[test_log::test]
    fn standard_encoding_is_a_dictionary() {
        let mut doc = Document::new();
        let enc = SimpleEncoder::new_named("StandardEncoding", &Differences::new()).unwrap();
        let obj = enc.to_pdf_object(&mut doc);
        let dict = encoding_dict(&doc, &obj);
        assert_eq!(render(dict.get(b"Type").unwrap()), "/Encoding");
        assert_eq!(render(dict.get(b"BaseEncoding").unwrap()), "/StandardEncoding");
        assert_eq!(render(dict.get(b"Differences").unwrap()), "[]");
    }

    #[test_log::test]
    fn overrides_are_written() {
        let mut doc = Document::new();
        let diffs = Differences::from([
            (0x80, "Euro".to_string()),
            (0x81, "bullet".to_string()),
            (0x90, "dagger".to_string()),
        ]);
        let enc = SimpleEncoder::new_named("MacRomanEncoding", &diffs).unwrap();
        let obj = enc.to_pdf_object(&mut doc);
        let dict = encoding_dict(&doc, &obj);
        assert_eq!(render(dict.get(b"BaseEncoding").unwrap()), "/MacRomanEncoding");
        assert_eq!(
            render(dict.get(b"Differences").unwrap()),
            "[128 /Euro /bullet 144 /dagger]"
        );
    }

    #[test_log::test]
    fn custom_round_trips_through_dictionary() {
        let mut doc = Document::new();
        let table = Differences::from([(0x41, "A".to_string()), (0x42, "Euro".to_string())]);
        let enc = SimpleEncoder::new_custom(&table, &Differences::new()).unwrap();
        let obj = enc.to_pdf_object(&mut doc);
        let back = SimpleEncoder::from_pdf_object(&doc, &obj).unwrap();
        assert_eq!(back, enc);
    }

    #[test]
    fn differences_run_ending_at_255() {
        let diffs = BTreeMap::from([(0xff, "a".to_string()), (0x00, "b".to_string())]);
        let array = Object::Array(differences_to_array(&diffs));
        assert_eq!(render(&array), "[0 /b 255 /a]");
    }

    #[test_log::test]
    fn parse_differences() {
        let doc = Document::new();
        let array = vec![
            Object::Integer(39),
            name("quotesingle"),
            Object::Integer(96),
            name("grave"),
            name("a"),
        ];
        let diffs = differences_from_array(&doc, &array).unwrap();
        assert_eq!(diffs.len(), 3);
        assert_eq!(diffs[&39], "quotesingle");
        assert_eq!(diffs[&97], "a");
    }

    #[test_log::test]
    fn names_past_the_last_code_are_dropped() {
        let doc = Document::new();
        let array = [Object::Integer(254), name("a"), name("b"), name("c"), name("d")];
        let diffs = differences_from_array(&doc, &array).unwrap();
        assert_eq!(diffs, Differences::from([(254, "a".to_string()), (255, "b".to_string())]));

        let mut dict = Dictionary::new();
        dict.set("Differences", Object::Array(array.to_vec()));
        let enc = SimpleEncoder::from_pdf_object(&doc, &Object::Dictionary(dict)).unwrap();
        assert_eq!(enc.base_name(), "StandardEncoding");
        assert_eq!(enc.charcode_to_rune(0xff), Some('b'));
    }

    #[test_log::test]
    fn parse_differences_errors() {
        let doc = Document::new();
        assert!(matches!(
            differences_from_array(&doc, &[name("a")]),
            Err(EncodingError::InvalidDifferences(_))
        ));
        assert!(matches!(
            differences_from_array(&doc, &[Object::Integer(256), name("a")]),
            Err(EncodingError::InvalidDifferences(_))
        ));
        assert!(matches!(
            differences_from_array(&doc, &[Object::Boolean(true)]),
            Err(EncodingError::InvalidDifferences(_))
        ));
    }

    #[test_log::test]
    fn dictionary_without_base_uses_standard() {
        let doc = Document::new();
        let mut dict = Dictionary::new();
        dict.set("Type", name("Encoding"));
        dict.set("Differences", Object::Array(vec![Object::Integer(39), name("quotesingle")]));
        let enc = SimpleEncoder::from_pdf_object(&doc, &Object::Dictionary(dict)).unwrap();
        assert_eq!(enc.base_name(), "StandardEncoding");
        assert_eq!(enc.charcode_to_rune(39), Some('\''));
        assert_eq!(enc.charcode_to_rune(0x41), Some('A'));
    }

    #[test_log::test]
    fn referenced_differences_are_followed() {
        let mut doc = Document::new();
        let diffs = doc.add_object(Object::Array(vec![Object::Integer(0x80), name("Euro")]));
        let mut dict = Dictionary::new();
        dict.set("BaseEncoding", name("WinAnsiEncoding"));
        dict.set("Differences", Object::Reference(diffs));
        let id = doc.add_object(dict);
        let enc = SimpleEncoder::from_pdf_object(&doc, &Object::Reference(id)).unwrap();
        assert_eq!(enc.base_name(), "WinAnsiEncoding");
        assert_eq!(enc.differences().len(), 1);
    }

    #[test_log::test]
    fn unknown_name_is_unsupported() {
        let doc = Document::new();
        assert!(matches!(
            SimpleEncoder::from_pdf_object(&doc, &name("Bogus")),
            Err(EncodingError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            SimpleEncoder::from_pdf_object(&doc, &Object::Integer(3)),
            Err(EncodingError::InvalidObject(_))
        ));
    }

    #[test_log::test]
    fn dangling_reference() {
        let doc = Document::new();
        assert!(matches!(
            SimpleEncoder::from_pdf_object(&doc, &Object::Reference((9, 0))),
            Err(EncodingError::Pdf(_))
        ));
    }
}
