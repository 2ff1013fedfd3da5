/// Errors that can occur while decoding or encoding device commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The hex text has an odd length or contains non-hex characters.
    #[error("malformed hex: {reason}")]
    MalformedHex { reason: String },

    /// The command ended in the middle of a header or escaped field.
    #[error("truncated command (needed {needed} more bytes, {remaining} remaining)")]
    TruncatedCommand { needed: usize, remaining: usize },

    /// The pulse array has no carrier element.
    #[error("pulse array is empty (missing carrier)")]
    EmptyPulseArray,

    /// A pulse duration does not fit the two-byte escape form.
    #[error("pulse {value}us out of range ({ticks} ticks, max 65535)")]
    ValueOutOfRange { value: u32, ticks: u64 },

    /// An RF carrier code does not fit the one-byte carrier field.
    #[error("carrier {0} out of range (max 255)")]
    CarrierOutOfRange(u32),

    /// Too many pulses for the length field or the configured limit.
    #[error("too many pulses ({count}, max {max})")]
    TooManyPulses { count: usize, max: usize },

    /// The command exceeds the configured maximum size.
    #[error("command too large ({size} bytes, max {max})")]
    CommandTooLarge { size: usize, max: usize },

    /// A textual pulse array could not be parsed.
    #[error("invalid pulse text: {0}")]
    InvalidPulseText(String),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::MalformedHex {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
