//! Well-known addresses, identifiers and type tags.
//!
//! These are ordinary values; nothing in the codec treats them specially.

use lazy_static::lazy_static;

use crate::model::{Address, Identifier, StructTag, TypeTag};

/// Address hosting the core modules (`0x1`).
pub const CORE_CODE_ADDRESS: Address = Address::ONE;

/// Module and struct name of the LBR currency.
pub const LBR_NAME: &str = "LBR";

lazy_static! {
    /// `LBR`, used as both module and struct name of the LBR currency.
    pub static ref LBR_IDENTIFIER: Identifier =
        Identifier::new(LBR_NAME).expect("LBR is a valid identifier");

    /// `0x1::LBR::LBR`
    pub static ref LBR_STRUCT_TAG: StructTag = StructTag::new(
        CORE_CODE_ADDRESS,
        LBR_IDENTIFIER.clone(),
        LBR_IDENTIFIER.clone(),
        Vec::new(),
    );
}

/// Returns the `0x1::LBR::LBR` type tag.
pub fn lbr_type_tag() -> TypeTag {
    TypeTag::structure(LBR_STRUCT_TAG.clone())
}

/// Returns the struct tag `0x1::<module>::<name>` with no type parameters.
pub fn core_struct_tag(module: Identifier, name: Identifier) -> StructTag {
    StructTag::new(CORE_CODE_ADDRESS, module, name, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lbr_struct_tag() {
        assert_eq!(LBR_STRUCT_TAG.to_string(), "0x1::LBR::LBR");
        assert_eq!(lbr_type_tag(), TypeTag::Struct(Box::new(LBR_STRUCT_TAG.clone())));
        assert_eq!(
            core_struct_tag(LBR_IDENTIFIER.clone(), LBR_IDENTIFIER.clone()),
            *LBR_STRUCT_TAG
        );
    }
}
