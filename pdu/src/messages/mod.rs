mod read_holding_registers_response;
mod read_input_registers_response;

pub use read_holding_registers_response::ReadHoldingRegistersResponse;
pub use read_input_registers_response::ReadInputRegistersResponse;

use bytes::Bytes;

use crate::{consts::MAX_BYTE_COUNT, encoding::*, function_code::FunctionCode};

/// A PDU type bound to a single function code.
pub trait Pdu {
    const FUNCTION_CODE: FunctionCode;

    fn function_code(&self) -> FunctionCode {
        Self::FUNCTION_CODE
    }
}

// Register responses share one layout:
// [function code][byte count N][N payload bytes]

fn check_byte_count(registers: Bytes) -> Result<Bytes, EncodeError> {
    if registers.len() > MAX_BYTE_COUNT {
        return Err(EncodeError::LengthOverflow(registers.len()));
    }
    Ok(registers)
}

fn pack_values(values: &[u16]) -> Bytes {
    values.iter().flat_map(|v| v.to_be_bytes()).collect::<Vec<u8>>().into()
}

fn unpack_values(registers: &[u8]) -> impl Iterator<Item = u16> + '_ {
    registers.chunks_exact(2).map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
}

fn encode_registers(encoder: &mut Encoder, function_code: FunctionCode, registers: &[u8]) -> EncodeResult {
    let byte_count: u8 = registers
        .len()
        .try_into()
        .map_err(|_| EncodeError::LengthOverflow(registers.len()))?;
    encoder.write_u8(function_code.into())?;
    encoder.write_u8(byte_count)?;
    encoder.write_bytes(registers)
}

fn decode_registers(decoder: &mut Decoder, function_code: FunctionCode) -> DecodeResult<Bytes> {
    let actual = decoder.peek_u8()?;
    if actual != function_code.code() {
        return Err(DecodeError::FunctionCodeMismatch {
            expected: function_code.code(),
            actual,
        });
    }
    decoder.read_u8()?;
    let byte_count = decoder.read_u8()?;
    decoder.read_bytes(byte_count.into())
}
