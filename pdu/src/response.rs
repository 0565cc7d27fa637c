use std::fmt::{self, Display};

use crate::{encoding::*, function_code::FunctionCode, messages::*};

/// A register response PDU of any supported function code.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Response {
    ReadHoldingRegisters(ReadHoldingRegistersResponse),
    ReadInputRegisters(ReadInputRegistersResponse),
}

impl Response {
    pub fn function_code(&self) -> FunctionCode {
        match self {
            Response::ReadHoldingRegisters(res) => res.function_code(),
            Response::ReadInputRegisters(res) => res.function_code(),
        }
    }

    pub fn registers(&self) -> &[u8] {
        match self {
            Response::ReadHoldingRegisters(res) => res.registers(),
            Response::ReadInputRegisters(res) => res.registers(),
        }
    }

    fn dispatch(decoder: &mut Decoder) -> DecodeResult<Self> {
        let code = decoder.peek_u8()?;
        match FunctionCode::from(code) {
            FunctionCode::ReadHoldingRegisters => Ok(Response::ReadHoldingRegisters(decoder.read_type()?)),
            FunctionCode::ReadInputRegisters => Ok(Response::ReadInputRegisters(decoder.read_type()?)),
            _ => Err(DecodeError::UnsupportedFunction(code)),
        }
    }
}

impl From<ReadHoldingRegistersResponse> for Response {
    fn from(value: ReadHoldingRegistersResponse) -> Self {
        Response::ReadHoldingRegisters(value)
    }
}

impl From<ReadInputRegistersResponse> for Response {
    fn from(value: ReadInputRegistersResponse) -> Self {
        Response::ReadInputRegisters(value)
    }
}

impl Encodable for Response {
    fn encode(&self, encoder: &mut Encoder) -> EncodeResult {
        match self {
            Response::ReadHoldingRegisters(res) => encoder.write_type(res),
            Response::ReadInputRegisters(res) => encoder.write_type(res),
        }
    }
}

impl Decodable<Self> for Response {
    fn decode(decoder: &mut Decoder) -> DecodeResult<Self> {
        let start = decoder.position();
        let result = Self::dispatch(decoder);
        log_result(start, &result);
        result
    }
}

#[cfg(feature = "log")]
fn log_result(start: usize, result: &DecodeResult<Response>) {
    match result {
        Ok(res) => log::trace!("Decoded {} at offset {start}", res.function_code()),
        Err(err) if err.is_incomplete() => log::debug!("Incomplete response PDU at offset {start}"),
        Err(err) => log::warn!("Failed to decode response PDU at offset {start}: {err}"),
    }
}

#[cfg(not(feature = "log"))]
fn log_result(_start: usize, _result: &DecodeResult<Response>) {}

impl Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::ReadHoldingRegisters(res) => Display::fmt(res, f),
            Response::ReadInputRegisters(res) => Display::fmt(res, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_function_code() {
        let holding = Response::decode_from_bytes(&[0x03, 0x02, 0x00, 0x2A]).unwrap();
        let input = Response::decode_from_bytes(&[0x04, 0x02, 0x00, 0x2A]).unwrap();

        assert_eq!(holding.function_code(), FunctionCode::ReadHoldingRegisters);
        assert_eq!(input.function_code(), FunctionCode::ReadInputRegisters);
        assert_eq!(holding.registers(), input.registers());
        assert_ne!(holding, input);
    }

    #[test]
    fn unsupported_function_consumes_nothing() {
        let buffer = [0x01, 0x01, 0x05];
        let mut decoder = Decoder::new(&buffer);

        let result: DecodeResult<Response> = decoder.read_type();

        assert_eq!(result, Err(DecodeError::UnsupportedFunction(0x01)));
        assert_eq!(decoder.position(), 0);
        assert_eq!(
            Response::decode_from_bytes(&[0x83, 0x02]),
            Err(DecodeError::UnsupportedFunction(0x83))
        );
        assert_eq!(Response::decode_from_bytes(&[]), Err(DecodeError::MissingData));
    }

    #[test]
    fn encodes_through_variant() {
        let res: Response = ReadInputRegistersResponse::from_values(&[0xBEEF]).unwrap().into();

        assert_eq!(res.encode_to_bytes().unwrap(), vec![0x04, 0x02, 0xBE, 0xEF]);
        assert_eq!(res.to_string(), "ReadInputRegistersResponse[registers=beef]");
    }
}
