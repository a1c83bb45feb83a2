//! Data model types.
//!
//! This module contains the closed catalogue of values the codec handles:
//! - Addresses and identifiers
//! - Type descriptors (TypeTag, StructTag)
//! - Scripts and their arguments
//! - Builders and text parsers

pub mod address;
pub mod builder;
pub mod identifier;
pub mod language_storage;
pub mod parser;
pub mod transaction;

pub use address::Address;
pub use builder::{ScriptBuilder, StructTagBuilder};
pub use identifier::Identifier;
pub use language_storage::{StructTag, TypeTag};
pub use parser::{parse_struct_tag, parse_transaction_argument, parse_type_tag};
pub use transaction::{Script, TransactionArgument};
