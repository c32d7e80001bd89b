//! Rejection reasons.
//!
//! Every failure is terminal: a transaction either satisfies all conditions
//! of its entry point or is rejected with the first failing reason. Reasons
//! carry the numbers a reviewer needs to see why the bound failed.

use thiserror::Error;

use paysplit_types::Credential;

/// Why a transaction was rejected by one of the gates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("output pays third party {destination}")]
    ThirdPartyPayout { destination: Credential },

    #[error("both beneficiaries signed; exactly one must authorize the withdrawal")]
    AmbiguousSigner,

    #[error("neither beneficiary signed")]
    Unauthorized,

    #[error("split bounds violated: withdrawer net {withdrawer_net} (limit {withdrawer_limit}), counterparty net {counterparty_net} (minimum {counterparty_min})")]
    SplitViolation {
        withdrawer_net: i128,
        withdrawer_limit: i128,
        counterparty_net: i128,
        counterparty_min: i128,
    },

    #[error("expected exactly one companion withdrawal mark, found {found}")]
    MissingCompanionCheck { found: usize },
}
