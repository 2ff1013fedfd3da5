//! Pulse-duration arrays.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

/// A carrier value followed by mark/space durations in microseconds.
///
/// Element 0 is the carrier: 0 or 38 for IR, otherwise an RF carrier code.
/// Always holds at least the carrier element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u32>", into = "Vec<u32>"))]
pub struct PulseArray(Vec<u32>);

impl PulseArray {
    /// Build an array from a carrier value and its pulse durations.
    pub fn new(carrier: u32, pulses: impl IntoIterator<Item = u32>) -> Self {
        let mut values = vec![carrier];
        values.extend(pulses);
        Self(values)
    }

    /// Decode a hex device command.
    pub fn from_command(hex: &str) -> Result<Self> {
        crate::decoder::decode(hex)
    }

    /// Encode as a hex device command.
    pub fn encode(&self) -> Result<String> {
        crate::encoder::encode(&self.0)
    }

    /// Encode as a hex device command with explicit limits.
    pub fn encode_with_config(&self, config: &CodecConfig) -> Result<String> {
        crate::encoder::encode_with_config(&self.0, config)
    }

    /// The carrier element.
    pub fn carrier(&self) -> u32 {
        self.0[0]
    }

    /// The durations following the carrier.
    pub fn pulses(&self) -> &[u32] {
        &self.0[1..]
    }

    /// The whole array, carrier first.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Consume the array and return the underlying values, carrier first.
    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for PulseArray {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for PulseArray {
    type Error = CodecError;

    fn try_from(values: Vec<u32>) -> Result<Self> {
        if values.is_empty() {
            return Err(CodecError::EmptyPulseArray);
        }
        Ok(Self(values))
    }
}

impl From<PulseArray> for Vec<u32> {
    fn from(array: PulseArray) -> Self {
        array.0
    }
}

impl PartialEq<[u32]> for PulseArray {
    fn eq(&self, other: &[u32]) -> bool {
        self.0 == other
    }
}

impl PartialEq<Vec<u32>> for PulseArray {
    fn eq(&self, other: &Vec<u32>) -> bool {
        &self.0 == other
    }
}

/// Comma-separated, the form IR consoles take for raw sends.
impl fmt::Display for PulseArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Parses decimal values separated by commas and/or whitespace.
impl FromStr for PulseArray {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|err| CodecError::InvalidPulseText(format!("{token:?}: {err}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_from(values)
    }
}
