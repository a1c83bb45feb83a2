//! Sequence and fixed-size array encoding/decoding.
//!
//! Sequences carry a varint element count; fixed-size arrays carry no prefix
//! because their length is part of the type.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::{Decode, Encode};
use crate::error::DecodeError;

impl<'a> Reader<'a> {
    /// Reads exactly `N` raw bytes into an array.
    ///
    /// Fails with [`DecodeError::InvalidLength`] if fewer than `N` bytes remain.
    #[inline]
    pub fn read_array<const N: usize>(
        &mut self,
        context: &'static str,
    ) -> Result<[u8; N], DecodeError> {
        let remaining = self.remaining_len();
        if remaining < N {
            return Err(DecodeError::InvalidLength {
                context,
                expected: N,
                remaining,
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads a varint count followed by that many elements.
    pub fn read_seq<T, F>(&mut self, field: &'static str, mut f: F) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&mut Self) -> Result<T, DecodeError>,
    {
        let count = self.read_length(field)?;
        // Every element occupies at least one byte, so the remaining input
        // bounds the allocation regardless of the declared count.
        let mut items = Vec::with_capacity(count.min(self.remaining_len()));
        for _ in 0..count {
            if self.is_empty() {
                return Err(DecodeError::UnexpectedEof { context: field });
            }
            items.push(f(self)?);
        }
        Ok(items)
    }
}

impl Writer {
    /// Writes raw bytes of a fixed-size array (no prefix).
    #[inline]
    pub fn write_array<const N: usize>(&mut self, bytes: &[u8; N]) {
        self.write_bytes(bytes);
    }

    /// Writes a varint count followed by each element.
    pub fn write_seq<T, F>(&mut self, items: &[T], mut f: F)
    where
        F: FnMut(&mut Self, &T),
    {
        self.write_length(items.len());
        for item in items {
            f(self, item);
        }
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut Writer) {
        writer.write_seq(self, |w, item| item.encode(w));
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut Writer) {
        self.as_slice().encode(writer);
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_seq("sequence", T::decode)
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self, writer: &mut Writer) {
        writer.write_array(self);
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_array("array")
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, writer: &mut Writer) {
        (**self).encode(writer);
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        T::decode(reader).map(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_roundtrip() {
        let items: Vec<u64> = vec![1, 2, 1234567];
        let mut writer = Writer::new();
        items.encode(&mut writer);
        assert_eq!(writer.as_bytes()[0], 3);
        assert_eq!(writer.len(), 1 + 3 * 8);

        let mut reader = Reader::new(writer.as_bytes());
        let decoded: Vec<u64> = Vec::decode(&mut reader).unwrap();
        assert_eq!(items, decoded);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_byte_vec_matches_prefixed_bytes() {
        let bytes = vec![9u8, 8, 7];
        let mut generic = Writer::new();
        bytes.encode(&mut generic);
        let mut prefixed = Writer::new();
        prefixed.write_bytes_prefixed(&bytes);
        assert_eq!(generic.as_bytes(), prefixed.as_bytes());
    }

    #[test]
    fn test_seq_truncated() {
        // Declares four u8 elements but carries two
        let data = [0x04u8, 1, 2];
        let mut reader = Reader::new(&data);
        let result: Result<Vec<u8>, _> = Vec::decode(&mut reader);
        assert!(matches!(result, Err(DecodeError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_seq_huge_count_does_not_preallocate() {
        // Count of u32::MAX with no elements: must fail cleanly
        let data = [0xFFu8, 0xFF, 0xFF, 0xFF, 0x0F];
        let mut reader = Reader::new(&data);
        let result: Result<Vec<u8>, _> = Vec::decode(&mut reader);
        assert!(matches!(
            result,
            Err(DecodeError::LengthExceedsLimit { .. })
        ));
    }

    #[test]
    fn test_array_invalid_length() {
        let data = [0u8; 15];
        let mut reader = Reader::new(&data);
        let result: Result<[u8; 16], _> = reader.read_array("address");
        assert_eq!(
            result,
            Err(DecodeError::InvalidLength {
                context: "address",
                expected: 16,
                remaining: 15,
            })
        );
    }
}
