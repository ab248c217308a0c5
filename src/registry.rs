//! Process-wide table of named simple encoding constructors.
//!
//! Built-in encodings are registered when the table is first touched.
//! Callers adding their own encodings should do so at startup, before the
//! table is read concurrently.

use std::collections::{BTreeMap, HashMap};
use std::sync::{LazyLock, PoisonError, RwLock};

use encoding_rs::WINDOWS_1252;
use tracing::trace;

use crate::encoder::SimpleEncoder;

/// Builds a fresh encoder for a registered encoding name.
pub type EncoderConstructor = fn() -> SimpleEncoder;

pub(crate) const WIN_ANSI_ENCODING: &str = "WinAnsiEncoding";

static REGISTRY: LazyLock<RwLock<HashMap<String, EncoderConstructor>>> = LazyLock::new(|| {
    let mut map: HashMap<String, EncoderConstructor> = HashMap::new();
    map.insert(WIN_ANSI_ENCODING.to_string(), win_ansi_encoder);
    RwLock::new(map)
});

/// Registers a constructor under a PDF encoding name.
///
/// # Panics
///
/// Panics if `name` is already registered.
pub fn register(name: &str, constructor: EncoderConstructor) {
    let mut map = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    if map.contains_key(name) {
        panic!("simple encoding {name:?} already registered");
    }
    trace!("registered simple encoding {}", name);
    map.insert(name.to_string(), constructor);
}

/// Returns the constructor registered for `name`.
pub fn lookup(name: &str) -> Option<EncoderConstructor> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .copied()
}

/// Whether a constructor is registered for `name`.
pub fn is_registered(name: &str) -> bool {
    lookup(name).is_some()
}

/// `/WinAnsiEncoding`: the graphic characters of windows-1252. Control
/// codes and the code points the code page leaves undefined stay unmapped.
fn win_ansi_encoder() -> SimpleEncoder {
    let mut table = BTreeMap::new();
    for code in 0x01..=0xffu8 {
        let bytes = [code];
        let (text, _) = WINDOWS_1252.decode_without_bom_handling(&bytes);
        let Some(rune) = text.chars().next() else {
            continue;
        };
        if rune.is_control() {
            continue;
        }
        table.insert(code, rune);
    }
    SimpleEncoder::from_table(WIN_ANSI_ENCODING, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_encoder() -> SimpleEncoder {
        SimpleEncoder::from_table("RegistryTestEncoding", BTreeMap::from([(0x41, 'Z')]))
    }

    #[test]
    fn win_ansi_is_builtin() {
        let ctor = lookup(WIN_ANSI_ENCODING).unwrap();
        let enc = ctor();
        assert_eq!(enc.base_name(), WIN_ANSI_ENCODING);
        assert_eq!(enc.charcode_to_rune(0x80), Some('€'));
        assert_eq!(enc.charcode_to_rune(0x41), Some('A'));
        assert_eq!(enc.charcode_to_rune(0x81), None);
        assert_eq!(enc.charcode_to_rune(0x9d), None);
        assert_eq!(enc.charcode_to_rune(0x00), None);
    }

    #[test]
    fn win_ansi_leaves_control_codes_unmapped() {
        let enc = win_ansi_encoder();
        for code in (0x01..0x20).chain([0x7f, 0x81, 0x8d, 0x8f, 0x90, 0x9d]) {
            assert_eq!(enc.charcode_to_rune(code), None, "{code:#04x}");
        }
        assert_eq!(enc.charcodes().len(), 0xff - 0x20 - 6 + 1);
        assert_eq!(enc.charcodes().first(), Some(&0x20));
    }

    #[test]
    fn register_then_lookup() {
        register("RegistryTestEncoding", test_encoder);
        assert!(is_registered("RegistryTestEncoding"));
        let enc = lookup("RegistryTestEncoding").unwrap()();
        assert_eq!(enc.charcode_to_rune(0x41), Some('Z'));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        register(WIN_ANSI_ENCODING, test_encoder);
    }

    #[test]
    fn unknown_name() {
        assert!(lookup("NoSuchEncoding").is_none());
    }
}
