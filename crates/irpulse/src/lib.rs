//! Transcoding between compact IR/RF transceiver commands and raw pulse arrays.
//!
//! A device command is a short binary record, usually carried as hex text:
//! - A 1-byte carrier (0x26 for IR, otherwise an RF carrier code)
//! - A 1-byte repeat count
//! - A 2-byte little-endian length
//! - Pulse fields in device ticks, one byte each or `0x00` + 2 bytes big-endian
//! - A fixed 9-byte terminator (IR only)
//!
//! A pulse array is `[carrier, pulse_1, pulse_2, ...]` with durations in
//! microseconds, the form IR-blaster firmware accepts for raw sends.
//!
//! ```
//! let command = irpulse::encode(&[0, 8192, 16384]).unwrap();
//! assert_eq!(command, "2600080000010d00021a000d05000000000000");
//!
//! let pulses = irpulse::decode(&command).unwrap();
//! assert_eq!(pulses.as_slice(), &[0, 8192, 16384]);
//! ```

pub mod carrier;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hexstr;
pub mod layout;
pub mod pulses;

pub use carrier::Carrier;
pub use config::{CodecConfig, DEFAULT_MAX_COMMAND_BYTES};
pub use decoder::{decode, decode_with_config, inspect, inspect_with_config, DeviceCommand};
pub use encoder::{encode, encode_command, encode_with_config};
pub use error::{CodecError, Result};
pub use layout::{
    HEADER_SIZE, IR_CARRIER_BYTE, IR_TERMINATOR, LENGTH_OVERHEAD, MAX_PULSES, TICK_DENOMINATOR,
    TICK_NUMERATOR,
};
pub use pulses::PulseArray;
