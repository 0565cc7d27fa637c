use std::fmt::Display;

/// Public function codes of the Modbus application protocol.
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
pub enum FunctionCode {
    ReadCoils = 1,
    ReadDiscreteInputs = 2,
    ReadHoldingRegisters = 3,
    ReadInputRegisters = 4,
    WriteSingleCoil = 5,
    WriteSingleRegister = 6,
    WriteMultipleCoils = 15,
    WriteMultipleRegisters = 16,
    MaskWriteRegister = 22,
    ReadWriteMultipleRegisters = 23,
    EncapsulatedInterfaceTransport = 43,
    /// A function code with the exception bit (0x80) set.
    Exception(u8),
    Unknown(u8),
}

impl FunctionCode {
    pub const fn code(self) -> u8 {
        match self {
            Self::ReadCoils => 1,
            Self::ReadDiscreteInputs => 2,
            Self::ReadHoldingRegisters => 3,
            Self::ReadInputRegisters => 4,
            Self::WriteSingleCoil => 5,
            Self::WriteSingleRegister => 6,
            Self::WriteMultipleCoils => 15,
            Self::WriteMultipleRegisters => 16,
            Self::MaskWriteRegister => 22,
            Self::ReadWriteMultipleRegisters => 23,
            Self::EncapsulatedInterfaceTransport => 43,
            Self::Exception(code) | Self::Unknown(code) => code,
        }
    }

    pub const fn is_exception(self) -> bool {
        self.code() & 0x80 != 0
    }
}

impl From<u8> for FunctionCode {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::ReadCoils,
            2 => Self::ReadDiscreteInputs,
            3 => Self::ReadHoldingRegisters,
            4 => Self::ReadInputRegisters,
            5 => Self::WriteSingleCoil,
            6 => Self::WriteSingleRegister,
            15 => Self::WriteMultipleCoils,
            16 => Self::WriteMultipleRegisters,
            22 => Self::MaskWriteRegister,
            23 => Self::ReadWriteMultipleRegisters,
            43 => Self::EncapsulatedInterfaceTransport,
            _ if value & 0x80 != 0 => Self::Exception(value),
            _ => Self::Unknown(value),
        }
    }
}

impl From<FunctionCode> for u8 {
    fn from(value: FunctionCode) -> Self {
        value.code()
    }
}

impl PartialEq for FunctionCode {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for FunctionCode {}

impl Display for FunctionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ReadCoils => "ReadCoils",
            Self::ReadDiscreteInputs => "ReadDiscreteInputs",
            Self::ReadHoldingRegisters => "ReadHoldingRegisters",
            Self::ReadInputRegisters => "ReadInputRegisters",
            Self::WriteSingleCoil => "WriteSingleCoil",
            Self::WriteSingleRegister => "WriteSingleRegister",
            Self::WriteMultipleCoils => "WriteMultipleCoils",
            Self::WriteMultipleRegisters => "WriteMultipleRegisters",
            Self::MaskWriteRegister => "MaskWriteRegister",
            Self::ReadWriteMultipleRegisters => "ReadWriteMultipleRegisters",
            Self::EncapsulatedInterfaceTransport => "EncapsulatedInterfaceTransport",
            Self::Exception(_) => "Exception",
            Self::Unknown(_) => "Unknown",
        };
        write!(f, "{name} ({:#04x})", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_round_trips() {
        for value in 0..=u8::MAX {
            assert_eq!(u8::from(FunctionCode::from(value)), value);
        }
    }

    #[test]
    fn exception_codes() {
        assert_eq!(FunctionCode::from(0x83), FunctionCode::Exception(0x83));
        assert!(FunctionCode::from(0x83).is_exception());
        assert!(!FunctionCode::ReadHoldingRegisters.is_exception());
        assert!(matches!(FunctionCode::from(0x64), FunctionCode::Unknown(0x64)));
    }

    #[test]
    fn display() {
        assert_eq!(FunctionCode::ReadHoldingRegisters.to_string(), "ReadHoldingRegisters (0x03)");
        assert_eq!(FunctionCode::from(0x90).to_string(), "Exception (0x90)");
    }
}
