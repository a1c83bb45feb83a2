//! Canonical binary encoding/decoding.
//!
//! Every value has exactly one encoding, and every accepted encoding decodes
//! to exactly one value. The layers are:
//! - [`primitives`]: varints, booleans, integers, byte strings
//! - [`container`]: sequences and fixed-size arrays
//! - [`variant`]: tagged union indices
//! - [`language_storage`] and [`transaction`]: the value model
//!
//! [`serialize`] and [`deserialize`] are the entry points.

pub mod container;
pub mod language_storage;
pub mod primitives;
pub mod transaction;
pub mod variant;

pub use primitives::{Reader, Writer};

use crate::error::DecodeError;
use crate::limits::{MAX_CONTAINER_DEPTH, MAX_SEQUENCE_LENGTH};

/// A value with a canonical binary encoding.
///
/// Encoding never fails: invalid values are rejected when they are built.
pub trait Encode {
    /// Appends the canonical encoding of `self` to the writer.
    fn encode(&self, writer: &mut Writer);
}

/// A value that can be decoded from its canonical encoding.
pub trait Decode: Sized {
    /// Decodes one value from the reader, leaving any following bytes unread.
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError>;
}

/// Limits applied while decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting depth of type tags and struct tags.
    pub max_depth: usize,
    /// Maximum element count of any sequence or byte string.
    pub max_sequence_length: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_CONTAINER_DEPTH,
            max_sequence_length: MAX_SEQUENCE_LENGTH,
        }
    }
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with a tighter depth bound.
    pub fn strict(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum sequence length.
    pub fn with_max_sequence_length(mut self, max_sequence_length: usize) -> Self {
        self.max_sequence_length = max_sequence_length;
        self
    }
}

/// Encodes a value to its canonical bytes.
pub fn serialize<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
    let mut writer = Writer::new();
    value.encode(&mut writer);
    writer.into_bytes()
}

/// Returns the length of the canonical encoding of a value.
pub fn serialized_size<T: Encode + ?Sized>(value: &T) -> usize {
    let mut writer = Writer::new();
    value.encode(&mut writer);
    writer.len()
}

/// Decodes exactly one value with default limits.
///
/// The whole input must be consumed; leftover bytes are
/// [`DecodeError::TrailingBytes`].
pub fn deserialize<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    deserialize_with_options(bytes, DecodeOptions::default())
}

/// Decodes exactly one value with explicit limits.
pub fn deserialize_with_options<T: Decode>(
    bytes: &[u8],
    options: DecodeOptions,
) -> Result<T, DecodeError> {
    let type_name = std::any::type_name::<T>();
    let mut reader = Reader::with_options(bytes, options);
    let result = T::decode(&mut reader).and_then(|value| reader.finish().map(|()| value));

    match &result {
        Ok(_) => tracing::trace!(type_name, len = bytes.len(), "decoded value"),
        Err(err) => tracing::debug!(
            type_name,
            len = bytes.len(),
            position = reader.position(),
            %err,
            "rejected encoding"
        ),
    }

    result
}
