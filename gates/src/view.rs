//! Read-only projection of a proposed transaction.
//!
//! The hosting ledger builds one `TransactionView` per validation call from
//! the raw transaction, projecting only the fields the gates read: inputs
//! and outputs in the designated value unit, the signer set, an optional
//! stake certificate, and the companion-authorization marks. Assets other
//! than the designated unit are dropped during projection. The view is
//! never mutated.

use serde::{Deserialize, Serialize};

use paysplit_types::{Credential, TxHash, UnitAmount};

/// A consumed input: who owned it and how much of the unit it carried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub owner: Credential,
    pub value: UnitAmount,
}

/// A produced output: destination credential and value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub destination: Credential,
    pub value: UnitAmount,
}

/// A stake-operation certificate carried by the transaction.
///
/// The certificate gate authorizes publication without inspecting the
/// payload, but the kinds are modelled so hosts can round-trip them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Certificate {
    Register,
    Deregister,
    Delegate { target: Credential },
}

/// A companion-authorization mark: the witness that a withdrawal check
/// registered under `target` will run for this transaction.
///
/// The mark's value is not re-validated by the spend gate; the withdrawal
/// check's accounting already covers every input and output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationMark {
    pub target: Credential,
    pub value: UnitAmount,
}

/// Reference to the output a spend input consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoRef {
    pub tx: TxHash,
    pub index: u32,
}

/// Everything the gates read from a proposed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    /// Credentials whose signatures are present on the transaction.
    pub signers: Vec<Credential>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorizations: Vec<AuthorizationMark>,
}

impl TransactionView {
    /// Whether `credential` is in the signer set.
    pub fn is_signed_by(&self, credential: &Credential) -> bool {
        self.signers.contains(credential)
    }
}
