use thiserror::Error;

/// Errors raised while building or (de)serializing a simple encoding.
///
/// Lookup misses are never errors; they are reported as `None`.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A custom encoding was requested with an empty code table.
    #[error("empty custom encoding")]
    EmptyEncoding,

    /// The base encoding name is neither registered nor predefined.
    #[error("unsupported font encoding: {0}")]
    UnsupportedEncoding(String),

    /// A `/Differences` array could not be interpreted.
    #[error("invalid differences array: {0}")]
    InvalidDifferences(String),

    /// An `/Encoding` entry was neither a name nor a dictionary.
    #[error("invalid encoding object: {0}")]
    InvalidObject(String),

    /// Error from the underlying document model.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_encoding_names_the_encoding() {
        let err = EncodingError::UnsupportedEncoding("Bogus".to_string());
        assert_eq!(err.to_string(), "unsupported font encoding: Bogus");
    }

    #[test]
    fn pdf_error_from_lopdf() {
        let missing = lopdf::Document::new().get_object((1, 0)).unwrap_err();
        let err: EncodingError = missing.into();
        assert!(matches!(err, EncodingError::Pdf(_)));
    }
}
