use caisse_engine::num::fmt1;
use caisse_engine::CreditRow;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Reconciliation outcomes
// ---------------------------------------------------------------------------

/// One additive term of a credit row's details expression after
/// reconciliation. `consumed` marks the portion covered by the client's
/// withdrawals; rendering (strike-through or otherwise) is entirely the
/// presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailTerm {
    pub value: f64,
    pub consumed: bool,
}

/// Which of the three reconciliation branches a credit row took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Credit exactly covered by withdrawals: everything consumed.
    Settled,
    /// Withdrawals exceed the credit: everything consumed, remainder
    /// offered as a pending CreditPayee row.
    Shortfall,
    /// Credit exceeds withdrawals: terms consumed smallest-first, at
    /// most one term splits.
    Split,
}

/// Reconciliation outcome for one credit row, identified by its index in
/// the Crédit table. Rows with a blank client get no outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CreditOutcome {
    pub index: usize,
    pub client: String,
    pub branch: Branch,
    /// Terms in reconciled order (ascending by value in the Split
    /// branch — this reorders the operator's original sequence).
    pub terms: Vec<DetailTerm>,
    pub withdrawn: f64,
    pub new_total: f64,
}

impl CreditOutcome {
    /// Render back to a plain-text row. Every term is kept, one decimal,
    /// in reconciled order; the consumed flags don't survive this form.
    pub fn to_row(&self) -> CreditRow {
        CreditRow {
            total_client: fmt1(self.new_total),
            details: self
                .terms
                .iter()
                .map(|t| fmt1(t.value))
                .collect::<Vec<_>>()
                .join(" + "),
            client: self.client.clone(),
        }
    }
}

/// A credit shortfall remainder awaiting the operator's confirmation
/// before it becomes a CreditPayee row. Never auto-applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingPayee {
    pub client: String,
    pub amount: f64,
}

// ---------------------------------------------------------------------------
// Result + meta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CalcMeta {
    pub engine_version: String,
    pub run_at: String,
}

/// Everything one "calculate" action produces. The input snapshot is not
/// mutated; Retrait rows never are.
#[derive(Debug, Clone, Serialize)]
pub struct CalcResult {
    pub meta: CalcMeta,
    pub total: f64,
    /// Display form, one decimal: `Total: 101.0`.
    pub display: String,
    pub total_retrait: f64,
    pub total_retrait_payee: f64,
    pub credits: Vec<CreditOutcome>,
    pub pending: Vec<PendingPayee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_row_keeps_all_terms_in_order() {
        let outcome = CreditOutcome {
            index: 0,
            client: "Ahmed".into(),
            branch: Branch::Split,
            terms: vec![
                DetailTerm { value: 10.0, consumed: true },
                DetailTerm { value: 2.0, consumed: true },
                DetailTerm { value: 18.0, consumed: false },
            ],
            withdrawn: 12.0,
            new_total: 18.0,
        };
        let row = outcome.to_row();
        assert_eq!(row.details, "10.0 + 2.0 + 18.0");
        assert_eq!(row.total_client, "18.0");
        assert_eq!(row.client, "Ahmed");
    }

    #[test]
    fn branch_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Branch::Shortfall).unwrap(), r#""shortfall""#);
    }
}
