//! Transaction scripts and their arguments.

use std::fmt;

use crate::model::{Address, TypeTag};

/// A value passed to a script as an argument.
///
/// Variant order is the wire order and is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransactionArgument {
    U8(u8),
    U64(u64),
    U128(u128),
    Address(Address),
    U8Vector(Vec<u8>),
    Bool(bool),
}

impl TransactionArgument {
    /// Number of declared variants.
    pub const VARIANT_COUNT: u32 = 6;

    /// Returns the variant index used on the wire.
    pub fn variant_index(&self) -> u32 {
        match self {
            TransactionArgument::U8(_) => 0,
            TransactionArgument::U64(_) => 1,
            TransactionArgument::U128(_) => 2,
            TransactionArgument::Address(_) => 3,
            TransactionArgument::U8Vector(_) => 4,
            TransactionArgument::Bool(_) => 5,
        }
    }

    /// Returns the type of this argument.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            TransactionArgument::U8(_) => TypeTag::U8,
            TransactionArgument::U64(_) => TypeTag::U64,
            TransactionArgument::U128(_) => TypeTag::U128,
            TransactionArgument::Address(_) => TypeTag::Address,
            TransactionArgument::U8Vector(_) => TypeTag::vector(TypeTag::U8),
            TransactionArgument::Bool(_) => TypeTag::Bool,
        }
    }
}

impl fmt::Display for TransactionArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionArgument::U8(v) => write!(f, "{}u8", v),
            TransactionArgument::U64(v) => write!(f, "{}u64", v),
            TransactionArgument::U128(v) => write!(f, "{}u128", v),
            TransactionArgument::Address(addr) => write!(f, "@{}", addr.to_hex_literal()),
            TransactionArgument::U8Vector(bytes) => {
                f.write_str("x\"")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                f.write_str("\"")
            }
            TransactionArgument::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// A transaction script: opaque bytecode plus its type and value arguments.
///
/// The bytecode is never inspected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Script {
    pub code: Vec<u8>,
    pub ty_args: Vec<TypeTag>,
    pub args: Vec<TransactionArgument>,
}

impl Script {
    /// Creates a script.
    pub fn new(code: Vec<u8>, ty_args: Vec<TypeTag>, args: Vec<TransactionArgument>) -> Self {
        Self {
            code,
            ty_args,
            args,
        }
    }

    /// Returns the bytecode.
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Returns the type arguments.
    pub fn ty_args(&self) -> &[TypeTag] {
        &self.ty_args
    }

    /// Returns the value arguments.
    pub fn args(&self) -> &[TransactionArgument] {
        &self.args
    }

    /// Splits the script into its parts.
    pub fn into_inner(self) -> (Vec<u8>, Vec<TypeTag>, Vec<TransactionArgument>) {
        (self.code, self.ty_args, self.args)
    }
}
