//! The authoritative withdrawal check.
//!
//! Conjunctive pipeline; the first failing condition is returned and
//! later conditions are not evaluated.

use paysplit_types::{Credential, Rational, SplitParams};

use crate::accounting::net_of;
use crate::error::GateError;
use crate::view::TransactionView;

/// Decide whether this transaction legally splits withdrawn value between
/// the two beneficiaries.
///
/// Floor rounding is applied both to the withdrawer's ceiling and to the
/// counterparty's minimum, so any rounding remainder resolves in the
/// counterparty's favor. The `<=` / `>=` asymmetry permits the withdrawer
/// to voluntarily overpay the counterparty; it never permits taking more
/// than the withdrawer's share or shorting the counterparty. A zero total
/// (a no-op probe transaction) trivially satisfies both bounds.
pub fn enforce_split(params: &SplitParams, view: &TransactionView) -> Result<(), GateError> {
    // 1. Every output must pay one of the two beneficiaries.
    for out in &view.outputs {
        if out.destination != params.owner_one && out.destination != params.owner_two {
            return Err(GateError::ThirdPartyPayout {
                destination: out.destination,
            });
        }
    }

    // 2. Net positions, computed independently from the same view.
    let net_one = net_of(view, &params.owner_one);
    let net_two = net_of(view, &params.owner_two);
    let total = net_one + net_two;

    // 3. Exactly one beneficiary must have signed.
    let one_signed = view.is_signed_by(&params.owner_one);
    let two_signed = view.is_signed_by(&params.owner_two);
    let withdrawer = match (one_signed, two_signed) {
        (true, true) => return Err(GateError::AmbiguousSigner),
        (false, false) => return Err(GateError::Unauthorized),
        (true, false) => Withdrawer::OwnerOne,
        (false, true) => Withdrawer::OwnerTwo,
    };

    // 4.–5. Exact fraction bounds, floored toward negative infinity.
    let share_one = Rational::basis_points(params.share_bps);
    let bound_one = share_one.mul_int(total).floor();
    let bound_two = share_one.complement().mul_int(total).floor();

    let (w_net, w_limit, c_net, c_min) = match withdrawer {
        Withdrawer::OwnerOne => (net_one, bound_one, net_two, bound_two),
        Withdrawer::OwnerTwo => (net_two, bound_two, net_one, bound_one),
    };

    if w_net > w_limit || c_net < c_min {
        return Err(GateError::SplitViolation {
            withdrawer_net: w_net,
            withdrawer_limit: w_limit,
            counterparty_net: c_net,
            counterparty_min: c_min,
        });
    }

    Ok(())
}

/// Which beneficiary's signature authorizes this transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Withdrawer {
    OwnerOne,
    OwnerTwo,
}

/// The withdrawer's net position, for logging at the entry point.
pub(crate) fn net_positions(params: &SplitParams, view: &TransactionView) -> (i128, i128) {
    (
        net_of(view, &params.owner_one),
        net_of(view, &params.owner_two),
    )
}
