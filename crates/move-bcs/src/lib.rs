//! move-bcs: canonical binary serialization for Move transaction values.
//!
//! This crate encodes and decodes addresses, identifiers, type descriptors,
//! transaction arguments and scripts in a deterministic binary format where
//! every value has exactly one valid encoding.
//!
//! # Quick Start
//!
//! ```rust
//! use move_bcs::{deserialize, serialize, Script, TransactionArgument};
//! use move_bcs::well_known::lbr_type_tag;
//!
//! let script = Script::new(
//!     Vec::new(),
//!     vec![lbr_type_tag()],
//!     vec![
//!         TransactionArgument::U8Vector(Vec::new()),
//!         TransactionArgument::U64(1234567),
//!         TransactionArgument::U8Vector(Vec::new()),
//!     ],
//! );
//!
//! let bytes = serialize(&script);
//! let decoded: Script = deserialize(&bytes).unwrap();
//! assert_eq!(script, decoded);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Value types (Address, Identifier, TypeTag, StructTag, Script)
//! - [`codec`]: Binary encoding/decoding
//! - [`well_known`]: Core address and common type tags
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Recursion through nested type tags is bounded
//! - Lengths are bounded and allocation never exceeds the input size
//! - Non-minimal varints and trailing bytes are rejected
//!
//! # Wire Format
//!
//! - Integers: fixed width, little endian
//! - Booleans: one byte, 0 or 1
//! - Lengths and variant indices: ULEB128, minimal form, at most 32 bits
//! - Byte strings, strings and sequences: length prefix + contents
//! - Addresses: 16 raw bytes, no prefix

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod well_known;

// Re-export commonly used types at crate root
pub use codec::{
    deserialize, deserialize_with_options, serialize, serialized_size, Decode, DecodeOptions,
    Encode, Reader, Writer,
};
pub use error::{DecodeError, ErrorKind, ParseError, ValueError};
pub use model::{
    parse_struct_tag, parse_transaction_argument, parse_type_tag, Address, Identifier, Script,
    ScriptBuilder, StructTag, StructTagBuilder, TransactionArgument, TypeTag,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
