use bytes::Buf;
use tracing::{debug, trace, warn};

use crate::carrier::Carrier;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::hexstr;
use crate::layout::{
    length_field, ticks_to_micros, ESCAPE, HEADER_SIZE, IR_TERMINATOR, IR_TERMINATOR_PREFIX,
};
use crate::pulses::PulseArray;

/// A parsed device command.
///
/// Pulse fields are kept as raw device ticks. The declared length is reported
/// as found and never drives parsing: IR commands end at the terminator,
/// everything else at the end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceCommand {
    /// Carrier from byte 0.
    pub carrier: Carrier,
    /// Repeat count from byte 1.
    pub repeat: u8,
    /// Little-endian length field from bytes 2-3.
    pub declared_len: u16,
    /// Pulse fields in device ticks.
    pub ticks: Vec<u16>,
    /// Whether the IR terminator was found.
    pub terminated: bool,
}

impl DeviceCommand {
    /// Parse a command from raw bytes.
    pub fn parse(mut src: &[u8]) -> Result<Self> {
        ensure_remaining(src, HEADER_SIZE)?;

        let carrier = Carrier::from_wire(src.get_u8());
        let repeat = src.get_u8();
        let declared_len = src.get_u16_le();

        let mut ticks = Vec::with_capacity(src.remaining());
        let mut terminated = false;

        // A header followed by nothing but the terminator carries no pulses.
        // Otherwise the end marker is only looked for after a field.
        if carrier.is_ir() && src == &IR_TERMINATOR[..] {
            terminated = true;
        }

        while !terminated && src.has_remaining() {
            let value = match src.get_u8() {
                ESCAPE => {
                    ensure_remaining(src, 2)?;
                    src.get_u16()
                }
                byte => u16::from(byte),
            };
            trace!(value, "pulse field");
            ticks.push(value);

            if carrier.is_ir() && src.starts_with(&IR_TERMINATOR_PREFIX) {
                if src != &IR_TERMINATOR[..] {
                    debug!(
                        trailer = %hexstr::encode_bytes(src),
                        "IR trailer differs from the full terminator"
                    );
                }
                terminated = true;
            }
        }

        Ok(Self {
            carrier,
            repeat,
            declared_len,
            ticks,
            terminated,
        })
    }

    /// The length field an encoder would write for these pulses.
    pub fn expected_len(&self) -> Option<u16> {
        length_field(self.ticks.len())
    }

    /// Pulse durations in microseconds, in field order.
    pub fn micros(&self) -> impl Iterator<Item = u32> + '_ {
        self.ticks.iter().copied().map(ticks_to_micros)
    }

    /// Convert to a pulse array. IR commands report carrier 0.
    pub fn to_pulse_array(&self) -> PulseArray {
        PulseArray::new(self.carrier.array_value(), self.micros())
    }

    fn warn_on_length_mismatch(&self) {
        let expected = self.expected_len();
        if expected != Some(self.declared_len) {
            warn!(
                declared = self.declared_len,
                expected = ?expected,
                pulses = self.ticks.len(),
                "length field disagrees with pulse count"
            );
        }
    }
}

/// Parse a hex device command into its header fields and raw ticks.
pub fn inspect(hex: &str) -> Result<DeviceCommand> {
    inspect_with_config(hex, &CodecConfig::default())
}

/// Parse a hex device command with explicit limits.
pub fn inspect_with_config(hex: &str, config: &CodecConfig) -> Result<DeviceCommand> {
    let size = hex.len() / 2;
    if size > config.max_command_bytes {
        return Err(CodecError::CommandTooLarge {
            size,
            max: config.max_command_bytes,
        });
    }

    let bytes = hexstr::decode_bytes(hex)?;
    let command = DeviceCommand::parse(&bytes)?;

    if config.warn_on_length_mismatch {
        command.warn_on_length_mismatch();
    }
    debug!(
        carrier = ?command.carrier,
        pulses = command.ticks.len(),
        terminated = command.terminated,
        "decoded device command"
    );

    Ok(command)
}

/// Decode a hex device command into `[carrier, pulse_1, pulse_2, ...]`.
pub fn decode(hex: &str) -> Result<PulseArray> {
    decode_with_config(hex, &CodecConfig::default())
}

/// Decode a hex device command with explicit limits.
pub fn decode_with_config(hex: &str, config: &CodecConfig) -> Result<PulseArray> {
    inspect_with_config(hex, config).map(|command| command.to_pulse_array())
}

fn ensure_remaining(src: &[u8], needed: usize) -> Result<()> {
    if src.len() < needed {
        return Err(CodecError::TruncatedCommand {
            needed,
            remaining: src.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    const TERMINATOR: &str = "000d05000000000000";

    #[test]
    fn decode_single_ir_pulse() {
        let hex = format!("26000700{}{TERMINATOR}", "7a");
        let array = decode(&hex).unwrap();
        assert_eq!(array, vec![0, 3715]);
    }

    #[test]
    fn decode_escaped_values() {
        // 0x010d = 269 ticks = 8192us, 0x021a = 538 ticks = 16384us
        let hex = format!("2600080000010d00021a{TERMINATOR}");
        let array = decode(&hex).unwrap();
        assert_eq!(array, vec![0, 8192, 16384]);
    }

    #[test]
    fn decode_rf_runs_to_end() {
        let array = decode("b200080000010d7a").unwrap();
        assert_eq!(array, vec![0xb2, 8192, 3715]);
    }

    #[test]
    fn decode_rf_does_not_stop_at_terminator_prefix() {
        // Escaped 0 then escaped 0x0d05; only IR commands treat 000d05 as an end marker.
        let array = decode("b2000800000000000d05").unwrap();
        assert_eq!(array, vec![0xb2, 0, ticks_to_micros(0x0d05)]);
    }

    #[test]
    fn decode_is_case_insensitive() {
        let lower = decode(&format!("2600080000010d00021a{TERMINATOR}")).unwrap();
        let upper = decode(&format!(
            "2600080000010D00021A{}",
            TERMINATOR.to_uppercase()
        ))
        .unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn decode_header_only() {
        assert_eq!(decode("64000600").unwrap(), vec![100]);
        assert_eq!(decode(&format!("26000600{TERMINATOR}")).unwrap(), vec![0]);
    }

    #[test]
    fn first_field_0d05_is_a_pulse() {
        let array = decode(&format!("26000800000d057a{TERMINATOR}")).unwrap();
        assert_eq!(array, vec![0, 101_501, 3715]);
        assert_eq!(ticks_to_micros(0x0d05), 101_501);
    }

    #[test]
    fn header_with_bare_terminator_prefix_reads_a_field() {
        // Only the exact 9-byte terminator ends a pulse-less IR command.
        let command = inspect("26000700000d05").unwrap();
        assert_eq!(command.ticks, vec![0x0d05]);
        assert!(!command.terminated);
    }

    #[test]
    fn decode_ir_without_terminator_runs_to_end() {
        let command = inspect("260008007a7a").unwrap();
        assert_eq!(command.ticks, vec![0x7a, 0x7a]);
        assert!(!command.terminated);
    }

    #[test]
    fn trailing_bytes_after_terminator_prefix_are_discarded() {
        let command = inspect("260007007a000d05ffff").unwrap();
        assert_eq!(command.ticks, vec![0x7a]);
        assert!(command.terminated);
    }

    #[test]
    fn inspect_reports_header_fields() {
        let command = inspect(&format!("26030800ff000100{TERMINATOR}")).unwrap();
        assert_eq!(command.carrier, Carrier::Ir);
        assert_eq!(command.repeat, 3);
        assert_eq!(command.declared_len, 8);
        assert_eq!(command.expected_len(), Some(8));
        assert_eq!(command.ticks, vec![0xff, 0x0100]);
        assert_eq!(command.micros().collect::<Vec<_>>(), vec![7765, 7796]);
    }

    #[test]
    #[traced_test]
    fn length_mismatch_is_logged_not_rejected() {
        let array = decode(&format!("26002a007a{TERMINATOR}")).unwrap();
        assert_eq!(array, vec![0, 3715]);
        assert!(logs_contain("length field disagrees with pulse count"));
    }

    #[test]
    #[traced_test]
    fn length_mismatch_warning_can_be_disabled() {
        let config = CodecConfig {
            warn_on_length_mismatch: false,
            ..CodecConfig::default()
        };
        let array = decode_with_config(&format!("26002a007a{TERMINATOR}"), &config).unwrap();
        assert_eq!(array, vec![0, 3715]);
        assert!(!logs_contain("length field disagrees"));
    }

    #[test]
    fn truncated_header() {
        let err = decode("260006").unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedCommand {
                needed: 4,
                remaining: 3
            }
        );
    }

    #[test]
    fn truncated_escape() {
        let err = decode("b20007000001").unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedCommand {
                needed: 2,
                remaining: 1
            }
        );
    }

    #[test]
    fn malformed_hex() {
        assert!(matches!(
            decode("2600070"),
            Err(CodecError::MalformedHex { .. })
        ));
        assert!(matches!(
            decode("26000700zz"),
            Err(CodecError::MalformedHex { .. })
        ));
    }

    #[test]
    fn command_too_large() {
        let config = CodecConfig {
            max_command_bytes: 4,
            ..CodecConfig::default()
        };
        assert_eq!(decode_with_config("64000600", &config).unwrap(), vec![100]);
        let err = decode_with_config("640007007a", &config).unwrap_err();
        assert_eq!(err, CodecError::CommandTooLarge { size: 5, max: 4 });
    }
}
