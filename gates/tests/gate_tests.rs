//! End-to-end checks of the three entry points against a deployed gate.

use paysplit_gates::{
    AuthorizationMark, Certificate, GateError, SplitGate, TransactionView, TxInput, TxOutput,
    UtxoRef,
};
use paysplit_types::{Credential, SplitParams, TxHash, UnitAmount};

fn cred(n: u8) -> Credential {
    Credential::new([n; 28])
}

fn gate(share_bps: u32) -> SplitGate {
    let params = SplitParams::new(cred(1), cred(2), share_bps);
    SplitGate::new(params, cred(5)).unwrap()
}

/// A withdrawal: pooled value arrives from a non-beneficiary input and is
/// paid out to the two owners.
fn withdrawal(pay_one: u64, pay_two: u64, signer: u8) -> TransactionView {
    TransactionView {
        inputs: vec![TxInput {
            owner: cred(9),
            value: UnitAmount::new(pay_one + pay_two),
        }],
        outputs: vec![
            TxOutput {
                destination: cred(1),
                value: UnitAmount::new(pay_one),
            },
            TxOutput {
                destination: cred(2),
                value: UnitAmount::new(pay_two),
            },
        ],
        signers: vec![cred(signer)],
        certificate: None,
        authorizations: vec![],
    }
}

#[test]
fn even_split_at_5000_bps() {
    let g = gate(5000);
    assert!(g.withdraw(&withdrawal(5_000_000, 5_000_000, 1)).is_ok());
    assert!(matches!(
        g.withdraw(&withdrawal(5_000_001, 4_999_999, 1)),
        Err(GateError::SplitViolation { .. })
    ));
}

#[test]
fn uneven_split_at_1234_bps() {
    // total 1_000_000, owner_two signs: owner_one's minimum is
    // floor(1_000_000 * 1234 / 10000) = 123_400.
    let g = gate(1234);
    assert!(matches!(
        g.withdraw(&withdrawal(123_399, 876_601, 2)),
        Err(GateError::SplitViolation { .. })
    ));
    assert!(g.withdraw(&withdrawal(123_400, 876_600, 2)).is_ok());
}

#[test]
fn withdrawer_may_overpay_the_counterparty() {
    let g = gate(5000);
    assert!(g.withdraw(&withdrawal(1_000_000, 9_000_000, 1)).is_ok());
    assert!(g.withdraw(&withdrawal(0, 10_000_000, 1)).is_ok());
}

#[test]
fn zero_total_probe_validates() {
    let g = gate(5000);
    let view = TransactionView {
        inputs: vec![],
        outputs: vec![],
        signers: vec![cred(2)],
        certificate: None,
        authorizations: vec![],
    };
    assert!(g.withdraw(&view).is_ok());
}

#[test]
fn third_party_payout_rejected() {
    let g = gate(5000);
    let mut view = withdrawal(500, 500, 1);
    view.outputs.push(TxOutput {
        destination: cred(8),
        value: UnitAmount::new(1),
    });
    assert_eq!(
        g.withdraw(&view),
        Err(GateError::ThirdPartyPayout { destination: cred(8) })
    );
}

#[test]
fn signer_set_must_be_exactly_one_owner() {
    let g = gate(5000);

    let mut both = withdrawal(500, 500, 1);
    both.signers.push(cred(2));
    assert_eq!(g.withdraw(&both), Err(GateError::AmbiguousSigner));

    let mut neither = withdrawal(500, 500, 1);
    neither.signers = vec![cred(7)];
    assert_eq!(g.withdraw(&neither), Err(GateError::Unauthorized));
}

#[test]
fn spend_requires_the_companion_mark() {
    let g = gate(5000);
    let utxo = UtxoRef {
        tx: TxHash::new([3; 32]),
        index: 0,
    };

    let mut view = withdrawal(500, 500, 1);
    assert_eq!(
        g.spend(&utxo, &view),
        Err(GateError::MissingCompanionCheck { found: 0 })
    );

    view.authorizations.push(AuthorizationMark {
        target: cred(5),
        value: UnitAmount::ZERO,
    });
    assert!(g.spend(&utxo, &view).is_ok());

    view.authorizations.push(AuthorizationMark {
        target: cred(5),
        value: UnitAmount::new(1),
    });
    assert_eq!(
        g.spend(&utxo, &view),
        Err(GateError::MissingCompanionCheck { found: 2 })
    );
}

#[test]
fn spend_ignores_mark_value_and_amounts() {
    // The spend gate does no accounting: a wildly unbalanced view with the
    // mark present still passes the per-input check (the withdrawal check
    // is what rejects it).
    let g = gate(5000);
    let utxo = UtxoRef {
        tx: TxHash::new([3; 32]),
        index: 7,
    };
    let mut view = withdrawal(10_000_000, 0, 1);
    view.authorizations.push(AuthorizationMark {
        target: cred(5),
        value: UnitAmount::new(999),
    });
    assert!(g.spend(&utxo, &view).is_ok());
    assert!(matches!(
        g.withdraw(&view),
        Err(GateError::SplitViolation { .. })
    ));
}

#[test]
fn certificate_accepts_either_owner_independent_of_amounts() {
    let g = gate(5000);
    let cert = Certificate::Delegate { target: cred(6) };

    // Amounts are grossly out of balance; the certificate gate does not care.
    let mut view = withdrawal(10_000_000, 0, 1);
    view.certificate = Some(cert.clone());
    assert!(g.publish(&cert, &view).is_ok());

    view.signers = vec![cred(1), cred(2)];
    assert!(g.publish(&cert, &view).is_ok());

    view.signers = vec![cred(7)];
    assert_eq!(g.publish(&cert, &view), Err(GateError::Unauthorized));
}
