/// Largest payload a one byte length field can announce.
pub const MAX_BYTE_COUNT: usize = u8::MAX as usize;

/// Whole registers that fit in [`MAX_BYTE_COUNT`] bytes.
pub const MAX_REGISTER_COUNT: usize = MAX_BYTE_COUNT / 2;

/// Bytes a register response occupies in addition to its payload.
pub const REGISTER_RESPONSE_HEADER_LEN: usize = 2;
