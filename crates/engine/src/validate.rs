//! Scalar field validation. Only the opening balance is mandatory; every
//! other failure is field-scoped and recoverable.

use std::fmt;

use crate::num::sum_expr;

/// Message shown to the operator when the mandatory opening balance is
/// absent. Kept in French, exactly as the form displays it.
pub const MSG_SOLDE_DE_DEBUT: &str = "svp insérer un solde de début";

/// Scalar form fields that undergo validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Multiplier,
    Fond,
    SoldeALinstant,
    SoldeDeDebut,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiplier => write!(f, "multiplier"),
            Self::Fond => write!(f, "fond"),
            Self::SoldeALinstant => write!(f, "soldeALinstant"),
            Self::SoldeDeDebut => write!(f, "soldeDeDebut"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Mandatory field empty, zero, or unparseable. Blocks calculation.
    Missing { field: Field },
    /// Optional field non-empty but not a number.
    Invalid { field: Field, value: String },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field: Field::SoldeDeDebut } => write!(f, "{MSG_SOLDE_DE_DEBUT}"),
            Self::Missing { field } => write!(f, "missing mandatory field '{field}'"),
            Self::Invalid { field, value } => {
                write!(f, "field '{field}': '{value}' is not a number")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Validate one scalar field. The two balance fields accept "+"-joined
/// sums (non-numeric terms dropping out, as in row totals); everything
/// else must be a single number. Empty optional fields validate to 0.
pub fn validate_scalar(value: &str, field: Field) -> Result<f64, FieldError> {
    let trimmed = value.trim();
    let mandatory = field == Field::SoldeDeDebut;

    if trimmed.is_empty() && !mandatory {
        return Ok(0.0);
    }

    let parsed: Option<f64> = match field {
        Field::SoldeALinstant | Field::SoldeDeDebut => Some(sum_expr(trimmed)),
        _ => trimmed.parse::<f64>().ok(),
    };

    if mandatory {
        return match parsed {
            Some(v) if v != 0.0 => Ok(v),
            _ => Err(FieldError::Missing { field }),
        };
    }

    parsed.ok_or_else(|| FieldError::Invalid {
        field,
        value: value.to_string(),
    })
}
