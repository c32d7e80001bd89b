//! Fundamental types for the paysplit withdrawal gate.
//!
//! This crate defines the types shared by every other crate in the workspace:
//! payment credentials, transaction hashes, value amounts, exact rational
//! arithmetic, and the deployment parameters of the split.

pub mod amount;
pub mod credential;
pub mod error;
pub mod hash;
pub mod params;
pub mod rational;

pub use amount::UnitAmount;
pub use credential::Credential;
pub use error::ParamsError;
pub use hash::TxHash;
pub use params::{SplitParams, FULL_SHARE_BPS};
pub use rational::Rational;
