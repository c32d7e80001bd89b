//! Stateless validation gates for a two-party withdrawal split.
//!
//! Three decision functions share one immutable [`TransactionView`]:
//!
//! - **withdraw** — the authoritative check: partitions the transaction's
//!   inputs and outputs between the two beneficiaries, computes each party's
//!   net position, and enforces the percentage bounds under exact rational
//!   arithmetic with floor rounding ([`enforce`]).
//! - **spend** — a thin per-input check that only confirms the withdrawal
//!   check is present in the same transaction ([`delegation`]); the O(n)
//!   accounting runs once per transaction, not once per spent input.
//! - **publish** — certificate authorization: either beneficiary may sign
//!   ([`certificate`]).
//!
//! Every decision is a pure function of the view plus the fixed deployment
//! parameters; there is no state between calls and no I/O.

pub mod accounting;
pub mod certificate;
pub mod delegation;
pub mod enforce;
pub mod error;
pub mod gate;
pub mod view;

pub use error::GateError;
pub use gate::SplitGate;
pub use view::{AuthorizationMark, Certificate, TransactionView, TxInput, TxOutput, UtxoRef};
