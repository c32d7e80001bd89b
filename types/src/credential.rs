//! Payment credential identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParamsError;

/// A 28-byte payment credential — the hash identifying a party on the
/// settlement layer.
///
/// Opaque to this crate: two credentials are either equal or not, nothing
/// else about them is interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential([u8; 28]);

impl Credential {
    /// Length of a credential in bytes.
    pub const LEN: usize = 28;

    pub const ZERO: Self = Self([0u8; 28]);

    pub fn new(bytes: [u8; 28]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 28] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 28]
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl FromStr for Credential {
    type Err = ParamsError;

    /// Parse a credential from 56 lowercase or uppercase hex characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)
            .ok_or_else(|| ParamsError::InvalidCredential(s.to_string()))?;
        if bytes.len() != Self::LEN {
            return Err(ParamsError::InvalidCredential(s.to_string()));
        }
        let mut out = [0u8; 28];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
pub(crate) mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
            .collect()
    }
}
