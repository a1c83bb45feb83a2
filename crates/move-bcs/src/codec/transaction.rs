//! Encoding/decoding for scripts and transaction arguments.
//!
//! A Script is written as code, ty_args, args.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::{Decode, Encode};
use crate::error::DecodeError;
use crate::model::{Address, Script, TransactionArgument, TypeTag};

// TransactionArgument variant indices
const ARG_U8: u32 = 0;
const ARG_U64: u32 = 1;
const ARG_U128: u32 = 2;
const ARG_ADDRESS: u32 = 3;
const ARG_U8_VECTOR: u32 = 4;
const ARG_BOOL: u32 = 5;

impl Encode for TransactionArgument {
    fn encode(&self, writer: &mut Writer) {
        writer.write_variant_index(self.variant_index());
        match self {
            TransactionArgument::U8(v) => writer.write_u8(*v),
            TransactionArgument::U64(v) => writer.write_u64(*v),
            TransactionArgument::U128(v) => writer.write_u128(*v),
            TransactionArgument::Address(addr) => addr.encode(writer),
            TransactionArgument::U8Vector(bytes) => writer.write_bytes_prefixed(bytes),
            TransactionArgument::Bool(v) => writer.write_bool(*v),
        }
    }
}

impl Decode for TransactionArgument {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let index =
            reader.read_variant_index("TransactionArgument", TransactionArgument::VARIANT_COUNT)?;
        let arg = match index {
            ARG_U8 => TransactionArgument::U8(reader.read_u8("U8")?),
            ARG_U64 => TransactionArgument::U64(reader.read_u64("U64")?),
            ARG_U128 => TransactionArgument::U128(reader.read_u128("U128")?),
            ARG_ADDRESS => TransactionArgument::Address(Address::decode(reader)?),
            ARG_U8_VECTOR => TransactionArgument::U8Vector(reader.read_bytes_prefixed("U8Vector")?),
            ARG_BOOL => TransactionArgument::Bool(reader.read_bool("Bool")?),
            _ => {
                return Err(DecodeError::UnknownVariant {
                    type_name: "TransactionArgument",
                    index,
                });
            }
        };
        Ok(arg)
    }
}

impl Encode for Script {
    fn encode(&self, writer: &mut Writer) {
        writer.write_bytes_prefixed(&self.code);
        writer.write_seq(&self.ty_args, |w, ty| ty.encode(w));
        writer.write_seq(&self.args, |w, arg| arg.encode(w));
    }
}

impl Decode for Script {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let code = reader.read_bytes_prefixed("code")?;
        let ty_args = reader.read_seq("ty_args", TypeTag::decode)?;
        let args = reader.read_seq("args", TransactionArgument::decode)?;
        Ok(Script { code, ty_args, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{deserialize, serialize};
    use crate::error::ErrorKind;

    #[test]
    fn test_argument_encodings() {
        assert_eq!(serialize(&TransactionArgument::U8(9)), vec![0, 9]);
        assert_eq!(
            serialize(&TransactionArgument::U64(1234567)),
            vec![1, 135, 214, 18, 0, 0, 0, 0, 0]
        );
        let mut u128_bytes = vec![2];
        u128_bytes.extend_from_slice(&u128::MAX.to_le_bytes());
        assert_eq!(serialize(&TransactionArgument::U128(u128::MAX)), u128_bytes);

        let mut addr_bytes = vec![3];
        addr_bytes.extend_from_slice(Address::ONE.as_bytes());
        assert_eq!(
            serialize(&TransactionArgument::Address(Address::ONE)),
            addr_bytes
        );

        assert_eq!(serialize(&TransactionArgument::U8Vector(vec![])), vec![4, 0]);
        assert_eq!(
            serialize(&TransactionArgument::U8Vector(vec![0xAA, 0xBB])),
            vec![4, 2, 0xAA, 0xBB]
        );
        assert_eq!(serialize(&TransactionArgument::Bool(true)), vec![5, 1]);
    }

    #[test]
    fn test_argument_rejects_bad_bool() {
        let err = deserialize::<TransactionArgument>(&[ARG_BOOL as u8, 2]).unwrap_err();
        assert_eq!(err, DecodeError::InvalidBool { value: 2 });
        assert_eq!(err.kind(), ErrorKind::InvalidBoolean);
    }

    #[test]
    fn test_argument_unknown_variant() {
        assert!(matches!(
            deserialize::<TransactionArgument>(&[6, 0]),
            Err(DecodeError::UnknownVariant { index: 6, .. })
        ));
    }

    #[test]
    fn test_argument_truncated_u64() {
        assert_eq!(
            deserialize::<TransactionArgument>(&[ARG_U64 as u8, 1, 2, 3]),
            Err(DecodeError::UnexpectedEof { context: "U64" })
        );
    }

    #[test]
    fn test_empty_script() {
        let script = Script::default();
        let bytes = serialize(&script);
        assert_eq!(bytes, vec![0, 0, 0]);
        assert_eq!(deserialize::<Script>(&bytes).unwrap(), script);
    }

    #[test]
    fn test_script_field_order() {
        let script = Script::new(
            vec![0xA1, 0x1C, 0xEB, 0x0B],
            vec![TypeTag::U8],
            vec![TransactionArgument::Bool(false)],
        );
        assert_eq!(
            serialize(&script),
            vec![4, 0xA1, 0x1C, 0xEB, 0x0B, 1, 1, 1, 5, 0]
        );
    }

    #[test]
    fn test_script_truncated_args() {
        // Declares two args but carries one
        let bytes = [0, 0, 2, ARG_U8 as u8, 7];
        assert_eq!(
            deserialize::<Script>(&bytes),
            Err(DecodeError::UnexpectedEof { context: "args" })
        );
    }
}
