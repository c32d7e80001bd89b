//! Stake-operation authorization.

use paysplit_types::SplitParams;

use crate::error::GateError;
use crate::view::TransactionView;

/// Accept iff either beneficiary signed.
///
/// Inclusive or, unlike the withdrawal check's exclusive-or: publishing a
/// certificate moves no value, so both parties signing is harmless. The
/// certificate payload is not inspected.
pub fn check_certificate(params: &SplitParams, view: &TransactionView) -> Result<(), GateError> {
    if view.is_signed_by(&params.owner_one) || view.is_signed_by(&params.owner_two) {
        Ok(())
    } else {
        Err(GateError::Unauthorized)
    }
}
