//! Codec for Modbus register response PDUs.
//!
//! A register response travels as `[function code][byte count N][N bytes]`.
//! Every PDU type implements [`Encodable`] and [`Decodable`]; [`Response`]
//! picks the right type from the function code of an incoming PDU.

pub mod consts;
mod encoding;
mod function_code;
pub mod hex;
mod messages;
mod response;

pub use encoding::{Decodable, DecodeError, DecodeResult, Decoder, Encodable, EncodeError, EncodeResult, Encoder};
pub use function_code::FunctionCode;
pub use messages::{Pdu, ReadHoldingRegistersResponse, ReadInputRegistersResponse};
pub use response::Response;
