//! Wire layout constants and tick conversions.
//!
//! ```text
//! ┌───────────┬──────────┬────────────┬──────────────────────┬─────────────────┐
//! │ Carrier   │ Repeat   │ Length     │ Pulse fields         │ Terminator      │
//! │ (1B)      │ (1B)     │ (2B LE)    │ 1B, or 0x00 + 2B BE  │ (9B, IR only)   │
//! │ 0x26 = IR │          │            │                      │ 00 0d 05 00 ... │
//! └───────────┴──────────┴────────────┴──────────────────────┴─────────────────┘
//! ```

/// Header: carrier (1) + repeat (1) + length (2) = 4 bytes.
pub const HEADER_SIZE: usize = 4;

/// Carrier byte marking an IR command (38 decimal).
pub const IR_CARRIER_BYTE: u8 = 0x26;

/// Pulse-array carrier value reported for IR commands.
pub const IR_ARRAY_CARRIER: u32 = 0;

/// Repeat byte written by the encoder ("don't repeat").
pub const NO_REPEAT: u8 = 0x00;

/// Byte introducing a two-byte big-endian pulse field.
pub const ESCAPE: u8 = 0x00;

/// Trailer closing every IR command.
pub const IR_TERMINATOR: [u8; 9] = [0x00, 0x0d, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Leading bytes of [`IR_TERMINATOR`] that end IR decoding.
pub const IR_TERMINATOR_PREFIX: [u8; 3] = [0x00, 0x0d, 0x05];

/// Constant added to the pulse count in the length field.
pub const LENGTH_OVERHEAD: usize = 6;

/// Tick numerator: one tick is `TICK_DENOMINATOR / TICK_NUMERATOR` microseconds.
pub const TICK_NUMERATOR: u64 = 269;

/// Tick denominator (2^13).
pub const TICK_DENOMINATOR: u64 = 8192;

/// Largest tick count a pulse field can carry.
pub const MAX_TICKS: u64 = u16::MAX as u64;

/// Largest pulse count whose length field still fits in two bytes.
pub const MAX_PULSES: usize = u16::MAX as usize - LENGTH_OVERHEAD;

/// Convert a raw pulse field to microseconds: `floor(ticks / 269 * 8192)`.
///
/// 269 is prime, so the integer quotient never differs from the floating-point
/// formula.
pub fn ticks_to_micros(ticks: u16) -> u32 {
    // 65535 * 8192 / 269 < u32::MAX
    (u64::from(ticks) * TICK_DENOMINATOR / TICK_NUMERATOR) as u32
}

/// Convert microseconds to raw ticks: `floor(micros * 269 / 8192)`.
///
/// Not clamped; callers check against [`MAX_TICKS`].
pub fn micros_to_ticks(micros: u32) -> u64 {
    u64::from(micros) * TICK_NUMERATOR / TICK_DENOMINATOR
}

/// Length field value for `pulse_count` pulses, if it fits two bytes.
pub fn length_field(pulse_count: usize) -> Option<u16> {
    u16::try_from(pulse_count.checked_add(LENGTH_OVERHEAD)?).ok()
}
