//! Primitive encoding/decoding.
//!
//! Implements the canonical ULEB128 varint, booleans, fixed-width
//! little-endian integers, and length-prefixed byte strings and UTF-8 text.

use crate::codec::{Decode, DecodeOptions, Encode};
use crate::error::DecodeError;
use crate::limits::{MAX_VARINT_BYTES, MAX_VARINT_VALUE};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling. The reader also tracks
/// the nesting depth of recursive values against [`DecodeOptions::max_depth`].
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
    options: DecodeOptions,
}

impl<'a> Reader<'a> {
    /// Creates a new reader with default limits.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, DecodeOptions::default())
    }

    /// Creates a new reader with explicit limits.
    pub fn with_options(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            data,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Returns the limits this reader enforces.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Fails with [`DecodeError::TrailingBytes`] unless all data was consumed.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TrailingBytes {
                remaining: self.remaining_len(),
            })
        }
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// Fails with [`DecodeError::RecursionLimitExceeded`] when entering the
    /// level would exceed the configured maximum depth.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        if self.depth >= self.options.max_depth {
            return Err(DecodeError::RecursionLimitExceeded {
                max: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a boolean byte (0 or 1).
    #[inline]
    pub fn read_bool(&mut self, context: &'static str) -> Result<bool, DecodeError> {
        match self.read_byte(context)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidBool { value }),
        }
    }

    /// Reads a u8.
    #[inline]
    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        self.read_byte(context)
    }

    /// Reads a little-endian u16.
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_fixed(context)?))
    }

    /// Reads a little-endian u32.
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_fixed(context)?))
    }

    /// Reads a little-endian u64.
    pub fn read_u64(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_fixed(context)?))
    }

    /// Reads a little-endian u128.
    pub fn read_u128(&mut self, context: &'static str) -> Result<u128, DecodeError> {
        Ok(u128::from_le_bytes(self.read_fixed(context)?))
    }

    /// Reads the `N` bytes of a fixed-width integer.
    #[inline]
    fn read_fixed<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads an unsigned ULEB128 varint bounded to 32 bits.
    ///
    /// Only the minimal encoding of a value is accepted: a final group of
    /// zero after a continuation byte is [`DecodeError::NonCanonicalEncoding`].
    #[inline]
    pub fn read_uleb128(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        let mut value: u64 = 0;

        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_byte(context)?;
            let digit = byte & 0x7F;
            value |= (digit as u64) << (7 * i);

            if value > MAX_VARINT_VALUE {
                return Err(DecodeError::IntegerOverflow { context });
            }

            if byte & 0x80 == 0 {
                if i > 0 && digit == 0 {
                    return Err(DecodeError::NonCanonicalEncoding { context });
                }
                return Ok(value as u32);
            }
        }

        // A continuation bit on the fifth byte implies more than 32 bits.
        Err(DecodeError::IntegerOverflow { context })
    }

    /// Reads a varint length and checks it against the sequence limit.
    pub fn read_length(&mut self, field: &'static str) -> Result<usize, DecodeError> {
        let len = self.read_uleb128(field)? as usize;
        let max = self.options.max_sequence_length;
        if len > max {
            return Err(DecodeError::LengthExceedsLimit { field, len, max });
        }
        Ok(len)
    }

    /// Reads a length-prefixed byte string, borrowing from the input.
    pub fn read_slice_prefixed(&mut self, field: &'static str) -> Result<&'a [u8], DecodeError> {
        let len = self.read_length(field)?;
        self.read_bytes(len, field)
    }

    /// Reads a length-prefixed byte string.
    pub fn read_bytes_prefixed(&mut self, field: &'static str) -> Result<Vec<u8>, DecodeError> {
        self.read_slice_prefixed(field).map(<[u8]>::to_vec)
    }

    /// Reads a length-prefixed UTF-8 string, borrowing from the input.
    pub fn read_str(&mut self, field: &'static str) -> Result<&'a str, DecodeError> {
        let bytes = self.read_slice_prefixed(field)?;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// Reads a length-prefixed UTF-8 string.
    #[inline]
    pub fn read_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        self.read_str(field).map(str::to_string)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a boolean as 0 or 1.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    /// Writes a u8.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Writes a little-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u64.
    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u128.
    pub fn write_u128(&mut self, value: u128) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an unsigned ULEB128 varint in its minimal form.
    ///
    /// Values above `u32::MAX` are written faithfully but no decoder in
    /// this crate will accept them back.
    #[inline]
    pub fn write_uleb128(&mut self, mut value: u64) {
        let mut buf = [0u8; 10];
        let mut len = 0;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            buf[len] = byte;
            len += 1;
            if value == 0 {
                break;
            }
        }
        self.buf.extend_from_slice(&buf[..len]);
    }

    /// Writes a sequence or byte-string length.
    #[inline]
    pub fn write_length(&mut self, len: usize) {
        self.write_uleb128(len as u64);
    }

    /// Writes a length-prefixed byte string.
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) {
        self.write_length(bytes.len());
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a length-prefixed UTF-8 string.
    pub fn write_string(&mut self, s: &str) {
        self.write_bytes_prefixed(s.as_bytes());
    }
}

// =============================================================================
// TRAIT IMPLS
// =============================================================================

macro_rules! impl_fixed_width {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl Encode for $ty {
                fn encode(&self, writer: &mut Writer) {
                    writer.$write(*self);
                }
            }

            impl Decode for $ty {
                fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
                    reader.$read(stringify!($ty))
                }
            }
        )*
    };
}

impl_fixed_width! {
    bool => write_bool, read_bool;
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    u128 => write_u128, read_u128;
}

impl Encode for str {
    fn encode(&self, writer: &mut Writer) {
        writer.write_string(self);
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut Writer) {
        writer.write_string(self);
    }
}

impl Decode for String {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_string("string")
    }
}
