use std::collections::BTreeMap;

use caisse_engine::num::parse_or_zero;
use caisse_engine::RetraitRow;

/// Per-client withdrawal totals, keyed by trimmed client name. Built
/// fresh for every reconciliation pass and discarded with it.
///
/// Matching is exact after trimming: differently-cased or
/// differently-spaced client names are distinct clients.
pub fn withdrawal_ledger(rows: &[RetraitRow]) -> BTreeMap<String, f64> {
    let mut ledger = BTreeMap::new();
    for row in rows {
        let client = row.client.trim();
        if client.is_empty() {
            continue;
        }
        *ledger.entry(client.to_string()).or_insert(0.0) += parse_or_zero(&row.retrait);
    }
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retrait(client: &str, amount: &str) -> RetraitRow {
        RetraitRow {
            retrait_payee: String::new(),
            retrait: amount.into(),
            client: client.into(),
        }
    }

    #[test]
    fn accumulates_per_client() {
        let ledger = withdrawal_ledger(&[
            retrait("Ahmed", "5"),
            retrait("Ahmed", "7"),
            retrait("Sara", "20"),
        ]);
        assert_eq!(ledger["Ahmed"], 12.0);
        assert_eq!(ledger["Sara"], 20.0);
    }

    #[test]
    fn blank_clients_are_ignored() {
        let ledger = withdrawal_ledger(&[retrait("", "5"), retrait("   ", "7")]);
        assert!(ledger.is_empty());
    }

    #[test]
    fn names_trim_but_stay_case_sensitive() {
        let ledger = withdrawal_ledger(&[retrait(" Ahmed ", "5"), retrait("ahmed", "7")]);
        assert_eq!(ledger["Ahmed"], 5.0);
        assert_eq!(ledger["ahmed"], 7.0);
    }

    #[test]
    fn unparseable_amounts_count_zero() {
        let ledger = withdrawal_ledger(&[retrait("Ahmed", ""), retrait("Ahmed", "x")]);
        assert_eq!(ledger["Ahmed"], 0.0);
    }
}
