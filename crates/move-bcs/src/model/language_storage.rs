//! Type descriptors: [`TypeTag`] and [`StructTag`].
//!
//! The two types are mutually recursive. A `vector<T>` owns its element
//! type, and a struct owns its type parameters.

use std::fmt;

use crate::model::{Address, Identifier};

/// A runtime type descriptor.
///
/// Variant order is the wire order and is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
}

impl TypeTag {
    /// Number of declared variants.
    pub const VARIANT_COUNT: u32 = 8;

    /// Returns the variant index used on the wire.
    pub fn variant_index(&self) -> u32 {
        match self {
            TypeTag::Bool => 0,
            TypeTag::U8 => 1,
            TypeTag::U64 => 2,
            TypeTag::U128 => 3,
            TypeTag::Address => 4,
            TypeTag::Signer => 5,
            TypeTag::Vector(_) => 6,
            TypeTag::Struct(_) => 7,
        }
    }

    /// Creates a `vector<element>` tag.
    pub fn vector(element: TypeTag) -> Self {
        TypeTag::Vector(Box::new(element))
    }

    /// Creates a struct tag.
    pub fn structure(tag: StructTag) -> Self {
        TypeTag::Struct(Box::new(tag))
    }

    /// Returns the number of nested type descriptors, counting this one.
    ///
    /// Every `TypeTag` and every `StructTag` counts as one level, which is
    /// exactly how the decoder counts recursion depth.
    pub fn depth(&self) -> usize {
        match self {
            TypeTag::Vector(inner) => 1 + inner.depth(),
            TypeTag::Struct(tag) => 1 + tag.depth(),
            _ => 1,
        }
    }
}

impl From<StructTag> for TypeTag {
    fn from(tag: StructTag) -> Self {
        TypeTag::structure(tag)
    }
}

/// A fully qualified struct type: `address::module::name<type_params>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructTag {
    pub address: Address,
    pub module: Identifier,
    pub name: Identifier,
    /// Generic arguments, in declaration order.
    pub type_params: Vec<TypeTag>,
}

impl StructTag {
    /// Creates a struct tag.
    pub fn new(
        address: Address,
        module: Identifier,
        name: Identifier,
        type_params: Vec<TypeTag>,
    ) -> Self {
        Self {
            address,
            module,
            name,
            type_params,
        }
    }

    /// Returns the nesting depth, counting this struct.
    pub fn depth(&self) -> usize {
        1 + self.type_params.iter().map(TypeTag::depth).max().unwrap_or(0)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::U128 => f.write_str("u128"),
            TypeTag::Address => f.write_str("address"),
            TypeTag::Signer => f.write_str("signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.address.to_hex_literal(),
            self.module,
            self.name
        )?;
        if let Some((first, rest)) = self.type_params.split_first() {
            write!(f, "<{}", first)?;
            for param in rest {
                write!(f, ", {}", param)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
