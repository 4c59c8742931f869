//! One calculation session's worth of form state: five scalar fields plus
//! the four row tables, with the derived-total and min-one-row invariants
//! enforced through the mutation API.

use serde::{Deserialize, Serialize};

use crate::num::{fmt1, parse_or_zero, sum_expr};
use crate::row::{CreditPayeeRow, CreditRow, DepenseRow, RetraitRow};

/// Which of the four row tables an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Credit,
    CreditPayee,
    Depense,
    Retrait,
}

/// A snapshot of the calculator form. Row order is display order only;
/// no computation depends on it. Each table holds at least one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSet {
    #[serde(default = "default_multiplier")]
    pub multiplier: String,
    #[serde(default)]
    pub fond: String,
    #[serde(default)]
    pub solde_a_linstant: String,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub solde_de_debut: String,
    #[serde(default)]
    pub credit_rows: Vec<CreditRow>,
    #[serde(default)]
    pub credit_payee_rows: Vec<CreditPayeeRow>,
    #[serde(default)]
    pub depense_rows: Vec<DepenseRow>,
    #[serde(default)]
    pub retrait_rows: Vec<RetraitRow>,
}

fn default_multiplier() -> String {
    "1.1".into()
}

impl Default for RowSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSet {
    /// A pristine form: default multiplier, one empty row per table.
    pub fn new() -> Self {
        Self {
            multiplier: default_multiplier(),
            fond: String::new(),
            solde_a_linstant: String::new(),
            site: String::new(),
            solde_de_debut: String::new(),
            credit_rows: vec![CreditRow::default()],
            credit_payee_rows: vec![CreditPayeeRow::default()],
            depense_rows: vec![DepenseRow::default()],
            retrait_rows: vec![RetraitRow::default()],
        }
    }

    /// Restore the pristine form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Reseed any table a hand-edited snapshot left empty. The mutation
    /// API never drops a table below one row; this covers deserialized
    /// input that bypassed it.
    pub fn ensure_min_rows(&mut self) {
        if self.credit_rows.is_empty() {
            self.credit_rows.push(CreditRow::default());
        }
        if self.credit_payee_rows.is_empty() {
            self.credit_payee_rows.push(CreditPayeeRow::default());
        }
        if self.depense_rows.is_empty() {
            self.depense_rows.push(DepenseRow::default());
        }
        if self.retrait_rows.is_empty() {
            self.retrait_rows.push(RetraitRow::default());
        }
    }

    pub fn add_row(&mut self, table: Table) {
        match table {
            Table::Credit => self.credit_rows.push(CreditRow::default()),
            Table::CreditPayee => self.credit_payee_rows.push(CreditPayeeRow::default()),
            Table::Depense => self.depense_rows.push(DepenseRow::default()),
            Table::Retrait => self.retrait_rows.push(RetraitRow::default()),
        }
    }

    /// Remove a row. Deleting the last remaining row of a table is a
    /// no-op. Returns whether a row was removed.
    pub fn remove_row(&mut self, table: Table, index: usize) -> bool {
        fn remove<T>(rows: &mut Vec<T>, index: usize) -> bool {
            if rows.len() > 1 && index < rows.len() {
                rows.remove(index);
                true
            } else {
                false
            }
        }
        match table {
            Table::Credit => remove(&mut self.credit_rows, index),
            Table::CreditPayee => remove(&mut self.credit_payee_rows, index),
            Table::Depense => remove(&mut self.depense_rows, index),
            Table::Retrait => remove(&mut self.retrait_rows, index),
        }
    }

    /// Write a Crédit row's details and recompute its derived total.
    pub fn set_credit_details(&mut self, index: usize, details: &str) {
        if let Some(row) = self.credit_rows.get_mut(index) {
            row.total_client = fmt1(sum_expr(details));
            row.details = details.to_string();
        }
    }

    /// Write a Crédit Payée row's details and recompute its derived total.
    pub fn set_credit_payee_details(&mut self, index: usize, details: &str) {
        if let Some(row) = self.credit_payee_rows.get_mut(index) {
            row.total_payee = fmt1(sum_expr(details));
            row.details = details.to_string();
        }
    }

    /// Write a Dépense row's details and recompute its derived total.
    pub fn set_depense_details(&mut self, index: usize, details: &str) {
        if let Some(row) = self.depense_rows.get_mut(index) {
            row.total_depense = fmt1(sum_expr(details));
            row.details = details.to_string();
        }
    }

    /// Write a Retrait row's withdrawal amount. No derived total here.
    pub fn set_retrait(&mut self, index: usize, value: &str) {
        if let Some(row) = self.retrait_rows.get_mut(index) {
            row.retrait = value.to_string();
        }
    }

    /// Write a Retrait row's paid-out field (`"OK"` = full amount paid).
    pub fn set_retrait_payee(&mut self, index: usize, value: &str) {
        if let Some(row) = self.retrait_rows.get_mut(index) {
            row.retrait_payee = value.to_string();
        }
    }

    /// Write a row's client name.
    pub fn set_client(&mut self, table: Table, index: usize, client: &str) {
        match table {
            Table::Credit => {
                if let Some(row) = self.credit_rows.get_mut(index) {
                    row.client = client.to_string();
                }
            }
            Table::CreditPayee => {
                if let Some(row) = self.credit_payee_rows.get_mut(index) {
                    row.client = client.to_string();
                }
            }
            Table::Depense => {
                if let Some(row) = self.depense_rows.get_mut(index) {
                    row.client = client.to_string();
                }
            }
            Table::Retrait => {
                if let Some(row) = self.retrait_rows.get_mut(index) {
                    row.client = client.to_string();
                }
            }
        }
    }

    /// Live footer: Σ `retrait` across the Retrait table, parse-or-0.
    pub fn total_retrait(&self) -> f64 {
        self.retrait_rows
            .iter()
            .map(|row| parse_or_zero(&row.retrait))
            .sum()
    }

    /// Live footer: Σ paid-out withdrawals. `"OK"` counts the row's full
    /// `retrait` amount; anything else counts the field's own value.
    pub fn total_retrait_payee(&self) -> f64 {
        self.retrait_rows
            .iter()
            .map(|row| {
                if row.retrait_payee == "OK" {
                    parse_or_zero(&row.retrait)
                } else {
                    parse_or_zero(&row.retrait_payee)
                }
            })
            .sum()
    }

    /// Σ materialized Crédit totals (not re-parsed from details).
    pub fn total_credit(&self) -> f64 {
        self.credit_rows
            .iter()
            .map(|row| parse_or_zero(&row.total_client))
            .sum()
    }

    /// Σ materialized Crédit Payée totals.
    pub fn total_credit_payee(&self) -> f64 {
        self.credit_payee_rows
            .iter()
            .map(|row| parse_or_zero(&row.total_payee))
            .sum()
    }

    /// Σ materialized Dépense totals.
    pub fn total_depense(&self) -> f64 {
        self.depense_rows
            .iter()
            .map(|row| parse_or_zero(&row.total_depense))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_seeds_one_row_per_table() {
        let rows = RowSet::new();
        assert_eq!(rows.multiplier, "1.1");
        assert_eq!(rows.credit_rows.len(), 1);
        assert_eq!(rows.credit_payee_rows.len(), 1);
        assert_eq!(rows.depense_rows.len(), 1);
        assert_eq!(rows.retrait_rows.len(), 1);
    }

    #[test]
    fn remove_below_one_row_is_noop() {
        let mut rows = RowSet::new();
        assert!(!rows.remove_row(Table::Credit, 0));
        rows.add_row(Table::Credit);
        assert!(rows.remove_row(Table::Credit, 0));
        assert_eq!(rows.credit_rows.len(), 1);
        assert!(!rows.remove_row(Table::Credit, 0));
    }

    #[test]
    fn remove_out_of_bounds_is_noop() {
        let mut rows = RowSet::new();
        rows.add_row(Table::Retrait);
        assert!(!rows.remove_row(Table::Retrait, 5));
        assert_eq!(rows.retrait_rows.len(), 2);
    }

    #[test]
    fn details_edit_recomputes_total() {
        let mut rows = RowSet::new();
        rows.set_credit_details(0, "10.5+20");
        assert_eq!(rows.credit_rows[0].total_client, "30.5");
        rows.set_credit_details(0, "");
        assert_eq!(rows.credit_rows[0].total_client, "0.0");
    }

    #[test]
    fn retrait_edit_has_no_derived_total() {
        let mut rows = RowSet::new();
        rows.set_retrait(0, "25");
        rows.set_retrait_payee(0, "OK");
        assert_eq!(rows.retrait_rows[0].retrait, "25");
        assert_eq!(rows.retrait_rows[0].retrait_payee, "OK");
    }

    #[test]
    fn retrait_payee_ok_counts_full_withdrawal() {
        let mut rows = RowSet::new();
        rows.set_retrait(0, "20");
        rows.set_retrait_payee(0, "OK");
        rows.add_row(Table::Retrait);
        rows.set_retrait(1, "15");
        rows.set_retrait_payee(1, "5");
        assert_eq!(rows.total_retrait(), 35.0);
        assert_eq!(rows.total_retrait_payee(), 25.0);
    }

    #[test]
    fn table_totals_use_materialized_fields() {
        let mut rows = RowSet::new();
        rows.set_credit_details(0, "10+20");
        rows.add_row(Table::Credit);
        // Blank second row contributes 0.
        assert_eq!(rows.total_credit(), 30.0);
    }

    #[test]
    fn reset_restores_pristine_form() {
        let mut rows = RowSet::new();
        rows.solde_de_debut = "100".into();
        rows.add_row(Table::Depense);
        rows.reset();
        assert_eq!(rows, RowSet::new());
    }

    #[test]
    fn deserialized_snapshot_reseeds_empty_tables() {
        let mut rows: RowSet =
            serde_json::from_str(r#"{"soldeDeDebut":"100","creditRows":[]}"#).unwrap();
        rows.ensure_min_rows();
        assert_eq!(rows.solde_de_debut, "100");
        assert_eq!(rows.multiplier, "1.1");
        assert_eq!(rows.credit_rows.len(), 1);
        assert_eq!(rows.retrait_rows.len(), 1);
    }
}
