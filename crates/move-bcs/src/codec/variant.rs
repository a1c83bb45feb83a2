//! Tagged union encoding/decoding.
//!
//! A variant is written as its varint index followed by its payload.
//! Catalogues are closed: an index past the last declared variant is an
//! error, never a passthrough.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::{Decode, Encode};
use crate::error::DecodeError;

impl<'a> Reader<'a> {
    /// Reads a variant index and checks it against the catalogue size.
    #[inline]
    pub fn read_variant_index(
        &mut self,
        type_name: &'static str,
        variant_count: u32,
    ) -> Result<u32, DecodeError> {
        let index = self.read_uleb128(type_name)?;
        if index >= variant_count {
            return Err(DecodeError::UnknownVariant { type_name, index });
        }
        Ok(index)
    }
}

impl Writer {
    /// Writes a variant index.
    #[inline]
    pub fn write_variant_index(&mut self, index: u32) {
        self.write_uleb128(index as u64);
    }
}

const OPTION_NONE: u32 = 0;
const OPTION_SOME: u32 = 1;

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut Writer) {
        match self {
            None => writer.write_variant_index(OPTION_NONE),
            Some(value) => {
                writer.write_variant_index(OPTION_SOME);
                value.encode(writer);
            }
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        match reader.read_variant_index("Option", 2)? {
            OPTION_NONE => Ok(None),
            _ => T::decode(reader).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_index_bounds() {
        let mut reader = Reader::new(&[0x07]);
        assert_eq!(reader.read_variant_index("TypeTag", 8), Ok(7));

        let mut reader = Reader::new(&[0x08]);
        assert_eq!(
            reader.read_variant_index("TypeTag", 8),
            Err(DecodeError::UnknownVariant {
                type_name: "TypeTag",
                index: 8,
            })
        );
    }

    #[test]
    fn test_variant_index_padded() {
        let mut reader = Reader::new(&[0x87, 0x00]);
        assert!(matches!(
            reader.read_variant_index("TypeTag", 8),
            Err(DecodeError::NonCanonicalEncoding { .. })
        ));
    }

    #[test]
    fn test_option() {
        let mut writer = Writer::new();
        Some(5u8).encode(&mut writer);
        None::<u8>.encode(&mut writer);
        assert_eq!(writer.as_bytes(), &[1, 5, 0]);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(Option::<u8>::decode(&mut reader), Ok(Some(5)));
        assert_eq!(Option::<u8>::decode(&mut reader), Ok(None));

        let mut reader = Reader::new(&[2]);
        assert!(matches!(
            Option::<u8>::decode(&mut reader),
            Err(DecodeError::UnknownVariant { type_name: "Option", index: 2 })
        ));
    }
}
