//! Deployment parameters of the split.
//!
//! Fixed at deployment and immutable for the life of the gate: the two
//! beneficiary credentials and owner one's share in basis points. Validated
//! once at setup; the per-call validation path never re-checks them.

use serde::{Deserialize, Serialize};

use crate::credential::Credential;
use crate::error::ParamsError;

/// Basis points denominator: a share of `FULL_SHARE_BPS` is 100%.
pub const FULL_SHARE_BPS: u32 = 10_000;

/// The three fixed parameters of the split.
///
/// Can be loaded from a TOML file via [`SplitParams::from_toml_file`] or
/// built programmatically (e.g. for tests). Credentials appear in TOML as
/// 56-character hex strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitParams {
    /// First beneficiary's payment credential.
    #[serde(with = "cred_hex")]
    pub owner_one: Credential,

    /// Second beneficiary's payment credential.
    #[serde(with = "cred_hex")]
    pub owner_two: Credential,

    /// Owner one's share: `share_bps / 10000` of the withdrawn total.
    pub share_bps: u32,
}

impl SplitParams {
    pub fn new(owner_one: Credential, owner_two: Credential, share_bps: u32) -> Self {
        Self {
            owner_one,
            owner_two,
            share_bps,
        }
    }

    /// Check the deployment preconditions.
    ///
    /// The split arithmetic itself is well-defined for any `share_bps`, but
    /// a share above 100% or two identical owners produces an economically
    /// meaningless gate, so deployment fails fast instead.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.share_bps > FULL_SHARE_BPS {
            return Err(ParamsError::ShareOutOfRange {
                bps: self.share_bps,
            });
        }
        if self.owner_one == self.owner_two {
            return Err(ParamsError::SameOwner);
        }
        Ok(())
    }

    /// Load parameters from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ParamsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ParamsError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse parameters from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ParamsError> {
        toml::from_str(s).map_err(|e| ParamsError::Config(e.to_string()))
    }

    /// Serialize the parameters to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Serde adapter: credentials as hex strings in human-readable formats.
mod cred_hex {
    use super::Credential;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(cred: &Credential, ser: S) -> Result<S::Ok, S::Error> {
        if ser.is_human_readable() {
            cred.to_string().serialize(ser)
        } else {
            cred.serialize(ser)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Credential, D::Error> {
        if de.is_human_readable() {
            let s = String::deserialize(de)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            Credential::deserialize(de)
        }
    }
}
