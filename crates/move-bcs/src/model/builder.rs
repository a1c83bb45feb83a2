//! Builder API for ergonomic value construction.
//!
//! Builders are consumed by `build()`, so a builder cannot be reused after
//! it has produced a value.
//!
//! # Example
//!
//! ```rust
//! use move_bcs::model::builder::{ScriptBuilder, StructTagBuilder};
//! use move_bcs::{Address, Identifier, TransactionArgument};
//!
//! let lbr = StructTagBuilder::new()
//!     .address(Address::ONE)
//!     .module(Identifier::new("LBR").unwrap())
//!     .name(Identifier::new("LBR").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let script = ScriptBuilder::new()
//!     .code(Vec::new())
//!     .ty_arg(lbr.into())
//!     .arg(TransactionArgument::U64(1234567))
//!     .build()
//!     .unwrap();
//! assert_eq!(script.args.len(), 1);
//! ```

use crate::error::ValueError;
use crate::model::{Address, Identifier, Script, StructTag, TransactionArgument, TypeTag};

/// Builder for [`StructTag`].
///
/// `address`, `module` and `name` are required; type parameters default to
/// none.
#[derive(Debug, Clone, Default)]
pub struct StructTagBuilder {
    address: Option<Address>,
    module: Option<Identifier>,
    name: Option<Identifier>,
    type_params: Vec<TypeTag>,
}

impl StructTagBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the defining address.
    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Sets the module name.
    pub fn module(mut self, module: Identifier) -> Self {
        self.module = Some(module);
        self
    }

    /// Sets the struct name.
    pub fn name(mut self, name: Identifier) -> Self {
        self.name = Some(name);
        self
    }

    /// Appends a type parameter.
    pub fn type_param(mut self, param: TypeTag) -> Self {
        self.type_params.push(param);
        self
    }

    /// Appends several type parameters, preserving their order.
    pub fn type_params(mut self, params: impl IntoIterator<Item = TypeTag>) -> Self {
        self.type_params.extend(params);
        self
    }

    /// Builds the StructTag, failing if a required field is unset.
    pub fn build(self) -> Result<StructTag, ValueError> {
        Ok(StructTag {
            address: self.address.ok_or_else(|| missing("StructTagBuilder", "address"))?,
            module: self.module.ok_or_else(|| missing("StructTagBuilder", "module"))?,
            name: self.name.ok_or_else(|| missing("StructTagBuilder", "name"))?,
            type_params: self.type_params,
        })
    }
}

/// Builder for [`Script`].
///
/// `code` is required (it may be empty); type and value arguments default
/// to none.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    code: Option<Vec<u8>>,
    ty_args: Vec<TypeTag>,
    args: Vec<TransactionArgument>,
}

impl ScriptBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the script bytecode.
    pub fn code(mut self, code: Vec<u8>) -> Self {
        self.code = Some(code);
        self
    }

    /// Appends a type argument.
    pub fn ty_arg(mut self, ty_arg: TypeTag) -> Self {
        self.ty_args.push(ty_arg);
        self
    }

    /// Appends several type arguments.
    pub fn ty_args(mut self, ty_args: impl IntoIterator<Item = TypeTag>) -> Self {
        self.ty_args.extend(ty_args);
        self
    }

    /// Appends a value argument.
    pub fn arg(mut self, arg: TransactionArgument) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends several value arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = TransactionArgument>) -> Self {
        self.args.extend(args);
        self
    }

    /// Returns the number of value arguments added so far.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Builds the Script, failing if the bytecode was never set.
    pub fn build(self) -> Result<Script, ValueError> {
        Ok(Script {
            code: self.code.ok_or_else(|| missing("ScriptBuilder", "code"))?,
            ty_args: self.ty_args,
            args: self.args,
        })
    }
}

fn missing(builder: &'static str, field: &'static str) -> ValueError {
    ValueError::IncompleteValue { builder, field }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn test_struct_tag_builder_basic() {
        let tag = StructTagBuilder::new()
            .address(Address::ONE)
            .module(ident("Account"))
            .name(ident("Balance"))
            .type_param(TypeTag::U64)
            .type_params([TypeTag::Bool, TypeTag::U8])
            .build()
            .unwrap();

        assert_eq!(tag.address, Address::ONE);
        assert_eq!(tag.module.as_str(), "Account");
        assert_eq!(tag.name.as_str(), "Balance");
        assert_eq!(
            tag.type_params,
            vec![TypeTag::U64, TypeTag::Bool, TypeTag::U8]
        );
    }

    #[test]
    fn test_struct_tag_builder_missing_fields() {
        let result = StructTagBuilder::new()
            .module(ident("LBR"))
            .name(ident("LBR"))
            .build();
        assert_eq!(
            result,
            Err(ValueError::IncompleteValue {
                builder: "StructTagBuilder",
                field: "address",
            })
        );

        let result = StructTagBuilder::new()
            .address(Address::ONE)
            .name(ident("LBR"))
            .build();
        assert!(matches!(
            result,
            Err(ValueError::IncompleteValue { field: "module", .. })
        ));

        let result = StructTagBuilder::new()
            .address(Address::ONE)
            .module(ident("LBR"))
            .build();
        assert!(matches!(
            result,
            Err(ValueError::IncompleteValue { field: "name", .. })
        ));
    }

    #[test]
    fn test_script_builder() {
        let builder = ScriptBuilder::new()
            .code(vec![0xA1, 0x1C])
            .ty_arg(TypeTag::U8)
            .arg(TransactionArgument::U8Vector(vec![]))
            .args([
                TransactionArgument::U64(1234567),
                TransactionArgument::Bool(true),
            ]);
        assert_eq!(builder.arg_count(), 3);

        let script = builder.build().unwrap();
        assert_eq!(script.code, vec![0xA1, 0x1C]);
        assert_eq!(script.ty_args, vec![TypeTag::U8]);
        assert_eq!(script.args[1], TransactionArgument::U64(1234567));
    }

    #[test]
    fn test_script_builder_requires_code() {
        let result = ScriptBuilder::new().arg(TransactionArgument::U8(1)).build();
        assert_eq!(
            result,
            Err(ValueError::IncompleteValue {
                builder: "ScriptBuilder",
                field: "code",
            })
        );

        // Empty bytecode is still a value
        assert!(ScriptBuilder::new().code(Vec::new()).build().is_ok());
    }
}
