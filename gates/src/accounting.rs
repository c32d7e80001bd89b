//! Net-position accounting.

use paysplit_types::Credential;

use crate::view::TransactionView;

/// Net change in held value for `beneficiary` within this transaction:
/// value received in outputs minus value contributed from owned inputs.
///
/// Negative when the beneficiary only funds the transaction (e.g. pays fees
/// and receives nothing). Sums run in i128, which no combination of u64
/// values can overflow.
pub fn net_of(view: &TransactionView, beneficiary: &Credential) -> i128 {
    let received: i128 = view
        .outputs
        .iter()
        .filter(|o| o.destination == *beneficiary)
        .map(|o| i128::from(o.value.raw()))
        .sum();

    let contributed: i128 = view
        .inputs
        .iter()
        .filter(|i| i.owner == *beneficiary)
        .map(|i| i128::from(i.value.raw()))
        .sum();

    received - contributed
}
