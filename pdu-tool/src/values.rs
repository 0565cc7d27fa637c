use std::{error::Error, fmt::Display};

use modbus_pdu::hex;

use crate::args::EncodeArgs;

#[derive(PartialEq, Clone, Debug)]
pub struct ParseValueError(String);

impl From<&str> for ParseValueError {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl Display for ParseValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ParseValueError {}

/// Parse one register value.
///
/// Accepts `0x` hex, `0b` binary, negative numbers as `i16` and plain
/// numbers as `u16`.
pub fn parse_register(value: &str) -> Result<u16, ParseValueError> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Empty value".into());
    }
    let lower = value.to_lowercase();

    if let Some(digits) = lower.strip_prefix("0x") {
        return u16::from_str_radix(&digits.replace('_', ""), 16).map_err(|_| ParseValueError(format!("Invalid hex register value: {value}")));
    }
    if let Some(digits) = lower.strip_prefix("0b") {
        return u16::from_str_radix(&digits.replace('_', ""), 2).map_err(|_| ParseValueError(format!("Invalid binary register value: {value}")));
    }
    if value.starts_with('-') {
        let signed: i16 = value.parse().map_err(|_| ParseValueError(format!("Register value out of range: {value}")))?;
        return Ok(u16::from_be_bytes(signed.to_be_bytes()));
    }

    value.parse().map_err(|_| ParseValueError(format!("Register value out of range: {value}")))
}

/// Payload bytes described by the encode arguments.
pub fn payload(args: &EncodeArgs) -> Result<Vec<u8>, Box<dyn Error>> {
    if let Some(raw) = &args.raw {
        return Ok(hex::parse(raw)?);
    }

    let mut bytes = Vec::with_capacity(args.values.len() * 2);
    for value in args.values.iter() {
        bytes.extend(parse_register(value)?.to_be_bytes());
    }
    Ok(bytes)
}
