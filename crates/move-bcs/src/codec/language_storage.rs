//! Encoding/decoding for addresses, identifiers and type descriptors.
//!
//! Field order is part of the format: a StructTag is written as address,
//! module, name, type_params.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::{Decode, Encode};
use crate::error::DecodeError;
use crate::model::{Address, Identifier, StructTag, TypeTag};

// TypeTag variant indices
const TYPE_TAG_BOOL: u32 = 0;
const TYPE_TAG_U8: u32 = 1;
const TYPE_TAG_U64: u32 = 2;
const TYPE_TAG_U128: u32 = 3;
const TYPE_TAG_ADDRESS: u32 = 4;
const TYPE_TAG_SIGNER: u32 = 5;
const TYPE_TAG_VECTOR: u32 = 6;
const TYPE_TAG_STRUCT: u32 = 7;

// =============================================================================
// ADDRESS / IDENTIFIER
// =============================================================================

impl Encode for Address {
    fn encode(&self, writer: &mut Writer) {
        writer.write_array(self.as_bytes());
    }
}

impl Decode for Address {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_array("address").map(Address::new)
    }
}

impl Encode for Identifier {
    fn encode(&self, writer: &mut Writer) {
        writer.write_string(self.as_str());
    }
}

impl Decode for Identifier {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let s = reader.read_str("identifier")?;
        Identifier::new(s).map_err(|_| DecodeError::InvalidIdentifier {
            identifier: s.to_string(),
        })
    }
}

// =============================================================================
// TYPE TAGS
// =============================================================================

impl Encode for TypeTag {
    fn encode(&self, writer: &mut Writer) {
        writer.write_variant_index(self.variant_index());
        match self {
            TypeTag::Vector(element) => element.encode(writer),
            TypeTag::Struct(tag) => tag.encode(writer),
            _ => {}
        }
    }
}

impl Decode for TypeTag {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.nested(|reader| {
            let index = reader.read_variant_index("TypeTag", TypeTag::VARIANT_COUNT)?;
            let tag = match index {
                TYPE_TAG_BOOL => TypeTag::Bool,
                TYPE_TAG_U8 => TypeTag::U8,
                TYPE_TAG_U64 => TypeTag::U64,
                TYPE_TAG_U128 => TypeTag::U128,
                TYPE_TAG_ADDRESS => TypeTag::Address,
                TYPE_TAG_SIGNER => TypeTag::Signer,
                TYPE_TAG_VECTOR => TypeTag::Vector(Box::new(TypeTag::decode(reader)?)),
                TYPE_TAG_STRUCT => TypeTag::Struct(Box::new(StructTag::decode(reader)?)),
                _ => {
                    return Err(DecodeError::UnknownVariant {
                        type_name: "TypeTag",
                        index,
                    });
                }
            };
            Ok(tag)
        })
    }
}

impl Encode for StructTag {
    fn encode(&self, writer: &mut Writer) {
        self.address.encode(writer);
        self.module.encode(writer);
        self.name.encode(writer);
        writer.write_seq(&self.type_params, |w, param| param.encode(w));
    }
}

impl Decode for StructTag {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.nested(|reader| {
            let address = Address::decode(reader)?;
            let module = Identifier::decode(reader)?;
            let name = Identifier::decode(reader)?;
            let type_params = reader.read_seq("type_params", TypeTag::decode)?;
            Ok(StructTag {
                address,
                module,
                name,
                type_params,
            })
        })
    }
}
