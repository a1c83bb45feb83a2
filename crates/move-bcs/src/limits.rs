//! Security limits for decoding untrusted input.
//!
//! None of these are part of the wire format. They bound the work a decoder
//! will do before rejecting an input.

/// Maximum number of bytes in an encoded ULEB128 varint (32-bit values).
pub const MAX_VARINT_BYTES: usize = 5;

/// Largest value a varint length or variant index may carry.
pub const MAX_VARINT_VALUE: u64 = u32::MAX as u64;

/// Default maximum element count for any sequence, byte string or string.
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// Default maximum nesting depth of type tags and struct tags.
pub const MAX_CONTAINER_DEPTH: usize = 500;

/// Size of an account address in bytes.
pub const ADDRESS_LENGTH: usize = 16;
