//! Carrier marker.
//!
//! Byte 0 of a device command and element 0 of a pulse array both carry the
//! carrier. IR uses the fixed wire byte 0x26 (38) and reports 0 in pulse
//! arrays; anything else is an RF carrier code.

use crate::error::{CodecError, Result};
use crate::layout::{IR_ARRAY_CARRIER, IR_CARRIER_BYTE};

/// Carrier of a command: IR, or an RF carrier code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Carrier {
    /// Infrared. Terminated by the IR trailer.
    Ir,
    /// RF carrier code in device units.
    Rf(u8),
}

impl Carrier {
    /// Interpret the first byte of a device command.
    pub fn from_wire(byte: u8) -> Self {
        if byte == IR_CARRIER_BYTE {
            Carrier::Ir
        } else {
            Carrier::Rf(byte)
        }
    }

    /// Interpret element 0 of a pulse array. Both 0 and 38 mean IR.
    pub fn from_array_value(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Carrier::Ir),
            v if v == u32::from(IR_CARRIER_BYTE) => Ok(Carrier::Ir),
            v => u8::try_from(v)
                .map(Carrier::Rf)
                .map_err(|_| CodecError::CarrierOutOfRange(v)),
        }
    }

    /// The carrier byte written on the wire.
    pub fn wire_byte(self) -> u8 {
        match self {
            Carrier::Ir => IR_CARRIER_BYTE,
            Carrier::Rf(code) => code,
        }
    }

    /// The value reported as element 0 of a pulse array.
    pub fn array_value(self) -> u32 {
        match self {
            Carrier::Ir => IR_ARRAY_CARRIER,
            Carrier::Rf(code) => u32::from(code),
        }
    }

    /// Returns true for IR commands.
    pub fn is_ir(self) -> bool {
        matches!(self, Carrier::Ir)
    }
}
