//! Entry points for the "calculate" action.

use caisse_engine::num::fmt1;
use caisse_engine::{CreditPayeeRow, RowSet};

use crate::error::CalcError;
use crate::ledger::withdrawal_ledger;
use crate::model::{CalcMeta, CalcResult, CreditOutcome, PendingPayee};
use crate::reconcile::reconcile_credits;
use crate::settlement::settlement_total;

/// Run the settlement formula and the per-client credit reconciliation
/// over one snapshot. The snapshot is not mutated; callers apply the
/// returned outcomes (and any confirmed remainders) explicitly.
pub fn run(rows: &RowSet) -> Result<CalcResult, CalcError> {
    let total = settlement_total(rows)?;

    let ledger = withdrawal_ledger(&rows.retrait_rows);
    let (credits, pending) = reconcile_credits(&rows.credit_rows, &ledger);

    Ok(CalcResult {
        meta: CalcMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        total,
        display: format!("Total: {}", fmt1(total)),
        total_retrait: rows.total_retrait(),
        total_retrait_payee: rows.total_retrait_payee(),
        credits,
        pending,
    })
}

/// Write reconciled credit rows back into a snapshot. Rows without an
/// outcome stay as they were.
pub fn apply_outcomes(rows: &mut RowSet, outcomes: &[CreditOutcome]) {
    for outcome in outcomes {
        if let Some(row) = rows.credit_rows.get_mut(outcome.index) {
            *row = outcome.to_row();
        }
    }
}

/// Append a confirmed shortfall remainder as a CreditPayee row. This is
/// the operator's explicit yes; `run` never does it implicitly.
pub fn apply_pending(rows: &mut RowSet, pending: &PendingPayee) {
    rows.credit_payee_rows.push(CreditPayeeRow {
        total_payee: fmt1(pending.amount),
        details: fmt1(pending.amount),
        client: pending.client.clone(),
    });
}
