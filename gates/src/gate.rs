//! Entry points exposed to the hosting settlement system.

use paysplit_types::{Credential, ParamsError, SplitParams};

use crate::certificate::check_certificate;
use crate::delegation::check_delegation;
use crate::enforce::{enforce_split, net_positions};
use crate::error::GateError;
use crate::view::{Certificate, TransactionView, UtxoRef};

/// The deployed gate: the three fixed split parameters plus the credential
/// under which the hosting ledger registered the withdrawal check (the
/// target the companion marks reference).
///
/// Construction validates the parameters once; every later call is a pure
/// function of the view.
#[derive(Clone, Debug)]
pub struct SplitGate {
    params: SplitParams,
    gate_id: Credential,
}

impl SplitGate {
    pub fn new(params: SplitParams, gate_id: Credential) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params, gate_id })
    }

    pub fn params(&self) -> &SplitParams {
        &self.params
    }

    pub fn gate_id(&self) -> &Credential {
        &self.gate_id
    }

    /// Per-input check for spending a gated output: confirm the withdrawal
    /// check runs in this same transaction. No accounting here.
    pub fn spend(&self, utxo: &UtxoRef, view: &TransactionView) -> Result<(), GateError> {
        let result = check_delegation(&self.gate_id, view);
        match &result {
            Ok(()) => tracing::debug!(tx = %utxo.tx, index = utxo.index, "spend authorized"),
            Err(reason) => tracing::warn!(
                tx = %utxo.tx,
                index = utxo.index,
                %reason,
                "spend rejected"
            ),
        }
        result
    }

    /// The authoritative withdrawal check.
    pub fn withdraw(&self, view: &TransactionView) -> Result<(), GateError> {
        let result = enforce_split(&self.params, view);
        let (net_one, net_two) = net_positions(&self.params, view);
        match &result {
            Ok(()) => tracing::debug!(net_one, net_two, "withdrawal authorized"),
            Err(reason) => tracing::warn!(net_one, net_two, %reason, "withdrawal rejected"),
        }
        result
    }

    /// Stake-certificate authorization: either beneficiary may publish.
    pub fn publish(&self, certificate: &Certificate, view: &TransactionView) -> Result<(), GateError> {
        let result = check_certificate(&self.params, view);
        match &result {
            Ok(()) => tracing::debug!(?certificate, "certificate authorized"),
            Err(reason) => tracing::warn!(?certificate, %reason, "certificate rejected"),
        }
        result
    }
}
