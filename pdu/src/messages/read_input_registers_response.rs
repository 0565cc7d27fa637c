use std::fmt::{self, Display};

use bytes::Bytes;

use super::{check_byte_count, decode_registers, encode_registers, pack_values, unpack_values, Pdu};
use crate::{encoding::*, function_code::FunctionCode, hex::Hex};

/// Response to a read input registers request. Same layout as
/// [`ReadHoldingRegistersResponse`](super::ReadHoldingRegistersResponse).
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct ReadInputRegistersResponse {
    registers: Bytes,
}

impl ReadInputRegistersResponse {
    pub fn new(registers: impl Into<Bytes>) -> Result<Self, EncodeError> {
        Ok(Self {
            registers: check_byte_count(registers.into())?,
        })
    }

    pub fn from_values(values: &[u16]) -> Result<Self, EncodeError> {
        Self::new(pack_values(values))
    }

    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn byte_count(&self) -> u8 {
        self.registers.len() as u8
    }

    pub fn register_count(&self) -> usize {
        self.registers.len() / 2
    }

    pub fn values(&self) -> impl Iterator<Item = u16> + '_ {
        unpack_values(&self.registers)
    }

    pub fn into_bytes(self) -> Bytes {
        self.registers
    }
}

impl Pdu for ReadInputRegistersResponse {
    const FUNCTION_CODE: FunctionCode = FunctionCode::ReadInputRegisters;
}

impl TryFrom<Vec<u8>> for ReadInputRegistersResponse {
    type Error = EncodeError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[u8]> for ReadInputRegistersResponse {
    type Error = EncodeError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(Bytes::copy_from_slice(value))
    }
}

impl Encodable for ReadInputRegistersResponse {
    fn encode(&self, encoder: &mut Encoder) -> EncodeResult {
        encode_registers(encoder, Self::FUNCTION_CODE, &self.registers)
    }
}

impl Decodable<Self> for ReadInputRegistersResponse {
    fn decode(decoder: &mut Decoder) -> DecodeResult<Self> {
        Ok(Self {
            registers: decode_registers(decoder, Self::FUNCTION_CODE)?,
        })
    }
}

impl Display for ReadInputRegistersResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReadInputRegistersResponse[registers={}]", Hex(&self.registers))
    }
}

impl fmt::Debug for ReadInputRegistersResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadInputRegistersResponse")
            .field("registers", &Hex(&self.registers))
            .finish()
    }
}
