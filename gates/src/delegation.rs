//! Per-input delegation to the authoritative withdrawal check.
//!
//! Spending a gated output does not re-run the accounting: the spend gate
//! only confirms that a companion-authorization mark for the withdrawal
//! check is present in the same transaction. The mark's value is ignored
//! here; the withdrawal check's accounting already covers every input and
//! output. This keeps spending N gated inputs at O(N) presence checks plus
//! one O(inputs + outputs) accounting pass, instead of N such passes.

use paysplit_types::Credential;

use crate::error::GateError;
use crate::view::TransactionView;

/// Accept iff exactly one companion mark targets `gate_id`.
pub fn check_delegation(gate_id: &Credential, view: &TransactionView) -> Result<(), GateError> {
    let found = view
        .authorizations
        .iter()
        .filter(|mark| mark.target == *gate_id)
        .count();
    if found == 1 {
        Ok(())
    } else {
        Err(GateError::MissingCompanionCheck { found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::AuthorizationMark;
    use paysplit_types::UnitAmount;

    fn test_credential(n: u8) -> Credential {
        Credential::new([n; 28])
    }

    fn view_with_marks(marks: Vec<AuthorizationMark>) -> TransactionView {
        TransactionView {
            inputs: vec![],
            outputs: vec![],
            signers: vec![],
            certificate: None,
            authorizations: marks,
        }
    }

    fn mark(target: u8, value: u64) -> AuthorizationMark {
        AuthorizationMark {
            target: test_credential(target),
            value: UnitAmount::new(value),
        }
    }

    #[test]
    fn accepts_single_matching_mark() {
        let view = view_with_marks(vec![mark(5, 0)]);
        assert!(check_delegation(&test_credential(5), &view).is_ok());
    }

    #[test]
    fn mark_value_is_not_inspected() {
        let view = view_with_marks(vec![mark(5, 123_456)]);
        assert!(check_delegation(&test_credential(5), &view).is_ok());
    }

    #[test]
    fn rejects_when_absent() {
        let view = view_with_marks(vec![mark(6, 0)]);
        assert_eq!(
            check_delegation(&test_credential(5), &view),
            Err(GateError::MissingCompanionCheck { found: 0 })
        );
    }

    #[test]
    fn rejects_duplicates() {
        let view = view_with_marks(vec![mark(5, 0), mark(5, 1)]);
        assert_eq!(
            check_delegation(&test_credential(5), &view),
            Err(GateError::MissingCompanionCheck { found: 2 })
        );
    }

    #[test]
    fn foreign_marks_do_not_count() {
        let view = view_with_marks(vec![mark(5, 0), mark(6, 0), mark(7, 0)]);
        assert!(check_delegation(&test_credential(5), &view).is_ok());
    }
}
