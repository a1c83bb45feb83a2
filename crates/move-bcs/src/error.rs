//! Error types for canonical encoding/decoding and value construction.

use thiserror::Error;

/// Coarse error taxonomy shared by decode and construction errors.
///
/// Several concrete variants can map onto one kind (for example both an
/// oversized varint and an oversized sequence length are `IntegerOverflow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Fewer bytes remain than a field requires.
    UnexpectedEndOfInput,
    /// Bytes remain after a complete top-level value.
    TrailingBytes,
    /// A field used more bytes than its minimal representation.
    NonCanonicalEncoding,
    /// A length or variant index exceeds the configured bound.
    IntegerOverflow,
    /// A variant index outside the declared catalogue.
    UnknownVariant,
    /// A boolean byte other than 0 or 1.
    InvalidBoolean,
    /// A string field that is not valid UTF-8.
    InvalidUtf8,
    /// A fixed-size field with the wrong number of bytes.
    InvalidLength,
    /// An identifier that violates the identifier grammar.
    InvalidIdentifier,
    /// A builder finalised with required fields unset.
    IncompleteValue,
    /// Nested type descriptors exceed the depth bound.
    RecursionLimitExceeded,
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("{remaining} trailing bytes after a complete value")]
    TrailingBytes { remaining: usize },

    #[error("non-canonical encoding of {context}")]
    NonCanonicalEncoding { context: &'static str },

    #[error("varint for {context} exceeds 32 bits")]
    IntegerOverflow { context: &'static str },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("unknown {type_name} variant index {index}")]
    UnknownVariant { type_name: &'static str, index: u32 },

    #[error("invalid bool value: {value} (expected 0x00 or 0x01)")]
    InvalidBool { value: u8 },

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("{context} needs {expected} bytes, only {remaining} remain")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        remaining: usize,
    },

    #[error("invalid identifier: {identifier:?}")]
    InvalidIdentifier { identifier: String },

    #[error("nesting depth exceeds maximum {max}")]
    RecursionLimitExceeded { max: usize },
}

impl DecodeError {
    /// Returns the taxonomy kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::UnexpectedEof { .. } => ErrorKind::UnexpectedEndOfInput,
            DecodeError::TrailingBytes { .. } => ErrorKind::TrailingBytes,
            DecodeError::NonCanonicalEncoding { .. } => ErrorKind::NonCanonicalEncoding,
            DecodeError::IntegerOverflow { .. } | DecodeError::LengthExceedsLimit { .. } => {
                ErrorKind::IntegerOverflow
            }
            DecodeError::UnknownVariant { .. } => ErrorKind::UnknownVariant,
            DecodeError::InvalidBool { .. } => ErrorKind::InvalidBoolean,
            DecodeError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            DecodeError::InvalidLength { .. } => ErrorKind::InvalidLength,
            DecodeError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            DecodeError::RecursionLimitExceeded { .. } => ErrorKind::RecursionLimitExceeded,
        }
    }
}

/// Error when constructing a value from raw parts.
///
/// These are raised before a value ever reaches the encoder, so encoding
/// itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid identifier: {identifier:?}")]
    InvalidIdentifier { identifier: String },

    #[error("invalid hex literal: {input:?}")]
    InvalidHex { input: String },

    #[error("{builder} is missing required field `{field}`")]
    IncompleteValue {
        builder: &'static str,
        field: &'static str,
    },
}

impl ValueError {
    /// Returns the taxonomy kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValueError::InvalidLength { .. } | ValueError::InvalidHex { .. } => {
                ErrorKind::InvalidLength
            }
            ValueError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            ValueError::IncompleteValue { .. } => ErrorKind::IncompleteValue,
        }
    }
}

/// Error when parsing the textual form of a type tag or argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected token {token:?}, expected {expected}")]
    UnexpectedToken {
        token: String,
        expected: &'static str,
    },

    #[error("unparsed trailing input: {rest:?}")]
    TrailingInput { rest: String },

    #[error("invalid number literal: {literal:?}")]
    InvalidNumber { literal: String },

    #[error(transparent)]
    InvalidValue(#[from] ValueError),

    #[error("type nesting depth exceeds maximum {max}")]
    RecursionLimitExceeded { max: usize },
}
