use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};

use crate::carrier::Carrier;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::hexstr;
use crate::layout::{
    length_field, micros_to_ticks, ESCAPE, HEADER_SIZE, IR_TERMINATOR, MAX_PULSES, MAX_TICKS,
    NO_REPEAT,
};

/// Encode `[carrier, pulse_1, ..., pulse_n]` as a lowercase hex device command.
///
/// A carrier of 0 or 38 produces an IR command (carrier byte 0x26 plus the IR
/// terminator); anything else is written as a one-byte RF carrier code.
pub fn encode(pulses: &[u32]) -> Result<String> {
    encode_with_config(pulses, &CodecConfig::default())
}

/// Encode with explicit limits.
pub fn encode_with_config(pulses: &[u32], config: &CodecConfig) -> Result<String> {
    let mut dst = BytesMut::new();
    encode_command(pulses, config, &mut dst)?;
    Ok(hexstr::encode_bytes(&dst))
}

/// Encode a pulse array into raw device-command bytes.
///
/// Every field is validated before anything is appended, so `dst` is left
/// untouched on error.
pub fn encode_command(pulses: &[u32], config: &CodecConfig, dst: &mut BytesMut) -> Result<()> {
    let (&frequency, durations) = pulses.split_first().ok_or(CodecError::EmptyPulseArray)?;
    let carrier = Carrier::from_array_value(frequency)?;

    let max = config.max_pulses.min(MAX_PULSES);
    let length = match length_field(durations.len()) {
        Some(length) if durations.len() <= max => length,
        _ => {
            return Err(CodecError::TooManyPulses {
                count: durations.len(),
                max,
            })
        }
    };

    for &micros in durations {
        pulse_ticks(micros)?;
    }

    // Worst case every pulse takes the escape form.
    dst.reserve(HEADER_SIZE + durations.len() * 3 + IR_TERMINATOR.len());
    dst.put_u8(carrier.wire_byte());
    dst.put_u8(NO_REPEAT);
    dst.put_u16_le(length);

    for &micros in durations {
        let ticks = pulse_ticks(micros)?;
        trace!(micros, ticks, "pulse field");
        put_ticks(ticks, dst);
    }

    if carrier.is_ir() {
        dst.put_slice(&IR_TERMINATOR);
    }

    debug!(
        carrier = ?carrier,
        pulses = durations.len(),
        bytes = dst.len(),
        "encoded device command"
    );
    Ok(())
}

fn pulse_ticks(micros: u32) -> Result<u16> {
    let ticks = micros_to_ticks(micros);
    if ticks > MAX_TICKS {
        return Err(CodecError::ValueOutOfRange {
            value: micros,
            ticks,
        });
    }
    Ok(ticks as u16)
}

fn put_ticks(ticks: u16, dst: &mut BytesMut) {
    match u8::try_from(ticks) {
        // A bare zero byte would read back as an escape introducer.
        Ok(byte) if byte != ESCAPE => dst.put_u8(byte),
        _ => {
            dst.put_u8(ESCAPE);
            dst.put_u16(ticks);
        }
    }
}
