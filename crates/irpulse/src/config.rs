use crate::layout::MAX_PULSES;

/// Default limit on decoded command size: 256 KiB.
pub const DEFAULT_MAX_COMMAND_BYTES: usize = 256 * 1024;

/// Controls codec limits and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Maximum size of a command accepted by the decoder, in bytes (not hex characters).
    pub max_command_bytes: usize,
    /// Maximum number of pulses accepted by the encoder. Capped by the
    /// two-byte length field regardless of this value.
    pub max_pulses: usize,
    /// When true, the decoder logs a warning if the declared length field
    /// disagrees with the pulses it actually found.
    pub warn_on_length_mismatch: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_command_bytes: DEFAULT_MAX_COMMAND_BYTES,
            max_pulses: MAX_PULSES,
            warn_on_length_mismatch: true,
        }
    }
}
