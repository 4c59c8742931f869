//! The net settlement formula for one shift:
//!
//! ```text
//! ((soldeDeDebut + totalRetrait) - soldeALinstant) * multiplier
//!     - totalRetraitPayee - totalDepense - totalCredit
//!     + totalCreditPayee + fond
//! ```
//!
//! Optional fields recover to 0 on parse failure; only the mandatory
//! opening balance blocks the calculation.

use caisse_engine::validate::{validate_scalar, Field};
use caisse_engine::{FieldError, RowSet};

pub fn settlement_total(rows: &RowSet) -> Result<f64, FieldError> {
    let solde_a_linstant =
        validate_scalar(&rows.solde_a_linstant, Field::SoldeALinstant).unwrap_or(0.0);
    let fond = validate_scalar(&rows.fond, Field::Fond).unwrap_or(0.0);
    let multiplier = validate_scalar(&rows.multiplier, Field::Multiplier).unwrap_or(0.0);
    let solde_de_debut = validate_scalar(&rows.solde_de_debut, Field::SoldeDeDebut)?;

    Ok(
        ((solde_de_debut + rows.total_retrait()) - solde_a_linstant) * multiplier
            - rows.total_retrait_payee()
            - rows.total_depense()
            - rows.total_credit()
            + rows.total_credit_payee()
            + fond,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use caisse_engine::num::fmt1;
    use caisse_engine::Table;

    /// The worked scenario: soldeDeDebut=100, totalRetrait=20,
    /// soldeALinstant=10, multiplier=1.1, totalRetraitPayee=5,
    /// totalDepense=3, totalCredit=15, totalCreditPayee=2, fond=1.
    fn scenario() -> RowSet {
        let mut rows = RowSet::new();
        rows.solde_de_debut = "100".into();
        rows.solde_a_linstant = "10".into();
        rows.multiplier = "1.1".into();
        rows.fond = "1".into();
        rows.set_retrait(0, "20");
        rows.set_retrait_payee(0, "5");
        rows.set_credit_details(0, "15");
        rows.set_credit_payee_details(0, "2");
        rows.set_depense_details(0, "3");
        rows
    }

    #[test]
    fn worked_scenario_totals_101() {
        let total = settlement_total(&scenario()).unwrap();
        // ((100+20)-10)*1.1 - 5 - 3 - 15 + 2 + 1
        assert!((total - 101.0).abs() < 1e-9);
        assert_eq!(fmt1(total), "101.0");
    }

    #[test]
    fn missing_opening_balance_blocks() {
        let mut rows = scenario();
        rows.solde_de_debut = String::new();
        assert!(matches!(
            settlement_total(&rows),
            Err(FieldError::Missing { field: Field::SoldeDeDebut })
        ));
        rows.solde_de_debut = "0".into();
        assert!(settlement_total(&rows).is_err());
    }

    #[test]
    fn invalid_optional_fields_recover_to_zero() {
        let mut rows = scenario();
        rows.fond = "abc".into();
        let total = settlement_total(&rows).unwrap();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn linear_in_fond_and_credit_payee() {
        let base = settlement_total(&scenario()).unwrap();

        let mut plus_fond = scenario();
        plus_fond.fond = "11".into();
        assert!((settlement_total(&plus_fond).unwrap() - base - 10.0).abs() < 1e-9);

        let mut plus_payee = scenario();
        plus_payee.add_row(Table::CreditPayee);
        plus_payee.set_credit_payee_details(1, "10");
        assert!((settlement_total(&plus_payee).unwrap() - base - 10.0).abs() < 1e-9);
    }

    #[test]
    fn linear_decreasing_in_depense_and_credit() {
        let base = settlement_total(&scenario()).unwrap();

        let mut plus_depense = scenario();
        plus_depense.add_row(Table::Depense);
        plus_depense.set_depense_details(1, "10");
        assert!((settlement_total(&plus_depense).unwrap() - base + 10.0).abs() < 1e-9);

        let mut plus_credit = scenario();
        plus_credit.add_row(Table::Credit);
        plus_credit.set_credit_details(1, "10");
        assert!((settlement_total(&plus_credit).unwrap() - base + 10.0).abs() < 1e-9);
    }

    #[test]
    fn balance_fields_accept_additive_sums() {
        let mut rows = scenario();
        rows.solde_de_debut = "60+40".into();
        let total = settlement_total(&rows).unwrap();
        assert!((total - 101.0).abs() < 1e-9);
    }
}
