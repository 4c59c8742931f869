//! Per-client credit/withdrawal netting: the second half of the
//! "calculate" action.

use std::collections::BTreeMap;

use caisse_engine::num::parse_or_zero;
use caisse_engine::CreditRow;

use crate::model::{Branch, CreditOutcome, DetailTerm, PendingPayee};

/// Net each named client's outstanding credit against that client's
/// withdrawal total.
///
/// Rows with a blank client are left untouched (no outcome). Withdrawal
/// budget is consumed smallest-term-first and at most one term splits.
/// Shortfall remainders come back as pending CreditPayee candidates; the
/// caller decides whether to append them.
pub fn reconcile_credits(
    credit_rows: &[CreditRow],
    ledger: &BTreeMap<String, f64>,
) -> (Vec<CreditOutcome>, Vec<PendingPayee>) {
    let mut outcomes = Vec::new();
    let mut pending = Vec::new();

    for (index, row) in credit_rows.iter().enumerate() {
        let client = row.client.trim();
        if client.is_empty() {
            continue;
        }

        let credit_total = parse_or_zero(&row.total_client);
        let withdrawn = ledger.get(client).copied().unwrap_or(0.0);

        let (branch, terms, new_total) = if credit_total == withdrawn {
            (Branch::Settled, consume_all(&row.details), 0.0)
        } else if credit_total < withdrawn {
            pending.push(PendingPayee {
                client: client.to_string(),
                amount: withdrawn - credit_total,
            });
            (Branch::Shortfall, consume_all(&row.details), 0.0)
        } else {
            (
                Branch::Split,
                split_terms(&row.details, withdrawn),
                credit_total - withdrawn,
            )
        };

        outcomes.push(CreditOutcome {
            index,
            client: client.to_string(),
            branch,
            terms,
            withdrawn,
            new_total,
        });
    }

    (outcomes, pending)
}

/// The numeric terms of a details expression; non-numeric tokens drop
/// out, matching row-total parsing.
fn detail_values(details: &str) -> Vec<f64> {
    details
        .split('+')
        .filter_map(|tok| tok.trim().parse::<f64>().ok())
        .collect()
}

fn consume_all(details: &str) -> Vec<DetailTerm> {
    detail_values(details)
        .into_iter()
        .map(|value| DetailTerm { value, consumed: true })
        .collect()
}

/// Sort terms ascending, consume from the smallest up, and split the
/// first term the remaining budget only partially covers.
fn split_terms(details: &str, budget: f64) -> Vec<DetailTerm> {
    let mut values = detail_values(details);
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut remaining = budget;
    let mut terms = Vec::with_capacity(values.len() + 1);
    for value in values {
        if remaining >= value {
            remaining -= value;
            terms.push(DetailTerm { value, consumed: true });
        } else if remaining > 0.0 {
            terms.push(DetailTerm { value: remaining, consumed: true });
            terms.push(DetailTerm { value: value - remaining, consumed: false });
            remaining = 0.0;
        } else {
            terms.push(DetailTerm { value, consumed: false });
        }
    }
    terms
}
