//! The four row variants. All fields are strings — numeric fields hold
//! decimal strings that may themselves be "+"-joined sums — and serialize
//! with the camelCase names of the persisted form records.

use serde::{Deserialize, Serialize};

/// One line of the Crédit table. `total_client` is derived from `details`
/// and is never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRow {
    #[serde(default)]
    pub total_client: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub client: String,
}

/// One line of the Crédit Payée table. `total_payee` is derived from
/// `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPayeeRow {
    #[serde(default)]
    pub total_payee: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub client: String,
}

/// One line of the Dépense table. `total_depense` is derived from
/// `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepenseRow {
    #[serde(default)]
    pub total_depense: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub client: String,
}

/// One line of the Retrait table. There is no derived total: `retrait` is
/// the amount itself, edited directly. A `retrait_payee` of `"OK"` means
/// the full withdrawal was paid out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetraitRow {
    #[serde(default)]
    pub retrait_payee: String,
    #[serde(default)]
    pub retrait: String,
    #[serde(default)]
    pub client: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_serialize_with_camel_case_keys() {
        let row = CreditRow {
            total_client: "30.5".into(),
            details: "10.5+20".into(),
            client: "Ahmed".into(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"totalClient":"30.5","details":"10.5+20","client":"Ahmed"}"#
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let row: RetraitRow = serde_json::from_str(r#"{"retrait":"20"}"#).unwrap();
        assert_eq!(row.retrait, "20");
        assert_eq!(row.retrait_payee, "");
        assert_eq!(row.client, "");
    }
}
