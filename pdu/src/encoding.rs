use bytes::{Buf, Bytes};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum EncodeError {
    /// The output buffer has no room left for the write.
    #[error("Output buffer overflow")]
    Overflow,
    /// A payload is too long for its one byte length field.
    #[error("Payload of {0} bytes does not fit in a one byte length field")]
    LengthOverflow(usize),
}

pub type EncodeResult = Result<(), EncodeError>;

pub trait Encodable {
    fn encode(&self, encoder: &mut Encoder) -> EncodeResult;

    fn encode_to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        Encoder::encode(self)
    }
}

/// Sequential writer for PDUs.
///
/// An encoder created with [`Encoder::with_limit`] behaves like a fixed size
/// output buffer: a write that does not fit fails with
/// [`EncodeError::Overflow`] and leaves the buffer untouched, while bytes
/// from earlier writes stay in place.
pub struct Encoder {
    buffer: Vec<u8>,
    limit: Option<usize>,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(16),
            limit: None,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Free space left, `None` when the encoder grows without bound.
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit - self.buffer.len())
    }

    fn ensure_capacity(&self, length: usize) -> EncodeResult {
        match self.remaining() {
            Some(remaining) if remaining < length => Err(EncodeError::Overflow),
            _ => Ok(()),
        }
    }

    pub fn write_u8(&mut self, value: u8) -> EncodeResult {
        self.ensure_capacity(1)?;
        self.buffer.push(value);
        Ok(())
    }

    pub fn write_bytes(&mut self, value: &[u8]) -> EncodeResult {
        self.ensure_capacity(value.len())?;
        self.buffer.extend_from_slice(value);
        Ok(())
    }

    pub fn write_type<T>(&mut self, value: &T) -> EncodeResult
    where
        T: Encodable + ?Sized,
    {
        value.encode(self)
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    pub fn encode<T>(value: &T) -> Result<Vec<u8>, EncodeError>
    where
        T: Encodable + ?Sized,
    {
        let mut encoder = Self::new();
        encoder.write_type(value)?;
        Ok(encoder.finish())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum DecodeError {
    /// The input ended before the PDU did.
    #[error("Missing data")]
    MissingData,
    /// The PDU starts with a different function code than the decoder handles.
    #[error("Function code mismatch: expected {expected:#04x}, found {actual:#04x}")]
    FunctionCodeMismatch { expected: u8, actual: u8 },
    /// No decoder is registered for the function code.
    #[error("Unsupported function code {0:#04x}")]
    UnsupportedFunction(u8),
}

impl DecodeError {
    /// Whether more input could turn this error into a successful decode.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, DecodeError::MissingData)
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

pub trait Decodable<T> {
    fn decode(decoder: &mut Decoder) -> DecodeResult<T>;

    fn decode_from_bytes(buffer: &[u8]) -> DecodeResult<T>
    where
        T: Decodable<T>,
    {
        Decoder::decode(buffer)
    }
}

/// Sequential reader over a borrowed input buffer.
///
/// A failed read returns [`DecodeError::MissingData`] without moving the
/// cursor.
pub struct Decoder<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Decoder<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buffer),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> DecodeResult<u8> {
        self.cursor.chunk().first().copied().ok_or(DecodeError::MissingData)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        if self.cursor.remaining() < 1 {
            return Err(DecodeError::MissingData);
        }
        Ok(self.cursor.get_u8())
    }

    /// Copy `length` bytes out of the input into owned storage.
    pub fn read_bytes(&mut self, length: usize) -> DecodeResult<Bytes> {
        if self.cursor.remaining() < length {
            return Err(DecodeError::MissingData);
        }
        Ok(self.cursor.copy_to_bytes(length))
    }

    pub fn read_type<T>(&mut self) -> DecodeResult<T>
    where
        T: Decodable<T>,
    {
        T::decode(self)
    }

    pub fn decode<T>(buffer: &'a [u8]) -> DecodeResult<T>
    where
        T: Decodable<T>,
    {
        let mut decoder = Self::new(buffer);
        let value: T = decoder.read_type()?;
        Ok(value)
    }
}
