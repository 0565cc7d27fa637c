use std::fmt::{self, Display};

use bytes::Bytes;

use super::{check_byte_count, decode_registers, encode_registers, pack_values, unpack_values, Pdu};
use crate::{encoding::*, function_code::FunctionCode, hex::Hex};

/// Response to a read holding registers request.
///
/// Holds the raw register payload, two big-endian bytes per register. The
/// payload is not required to have an even length, but it never exceeds 255
/// bytes so it always fits the one byte length field on the wire.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct ReadHoldingRegistersResponse {
    registers: Bytes,
}

impl ReadHoldingRegistersResponse {
    /// Wrap a register payload.
    ///
    /// Fails with [`EncodeError::LengthOverflow`] when the payload is longer
    /// than 255 bytes.
    pub fn new(registers: impl Into<Bytes>) -> Result<Self, EncodeError> {
        Ok(Self {
            registers: check_byte_count(registers.into())?,
        })
    }

    /// Pack register values big-endian. At most 127 values fit.
    pub fn from_values(values: &[u16]) -> Result<Self, EncodeError> {
        Self::new(pack_values(values))
    }

    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn byte_count(&self) -> u8 {
        // bounded by construction
        self.registers.len() as u8
    }

    pub fn register_count(&self) -> usize {
        self.registers.len() / 2
    }

    /// Register values; a trailing odd byte is skipped.
    pub fn values(&self) -> impl Iterator<Item = u16> + '_ {
        unpack_values(&self.registers)
    }

    pub fn into_bytes(self) -> Bytes {
        self.registers
    }
}

impl Pdu for ReadHoldingRegistersResponse {
    const FUNCTION_CODE: FunctionCode = FunctionCode::ReadHoldingRegisters;
}

impl TryFrom<Vec<u8>> for ReadHoldingRegistersResponse {
    type Error = EncodeError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[u8]> for ReadHoldingRegistersResponse {
    type Error = EncodeError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(Bytes::copy_from_slice(value))
    }
}

impl Encodable for ReadHoldingRegistersResponse {
    fn encode(&self, encoder: &mut Encoder) -> EncodeResult {
        encode_registers(encoder, Self::FUNCTION_CODE, &self.registers)
    }
}

impl Decodable<Self> for ReadHoldingRegistersResponse {
    /// Consumes `2 + N` bytes on success. On failure the decoder position is
    /// left unspecified and the caller should restart from the PDU start.
    fn decode(decoder: &mut Decoder) -> DecodeResult<Self> {
        Ok(Self {
            registers: decode_registers(decoder, Self::FUNCTION_CODE)?,
        })
    }
}

impl Display for ReadHoldingRegistersResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReadHoldingRegistersResponse[registers={}]", Hex(&self.registers))
    }
}

impl fmt::Debug for ReadHoldingRegistersResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadHoldingRegistersResponse")
            .field("registers", &Hex(&self.registers))
            .finish()
    }
}
