use std::fmt;

use caisse_engine::FieldError;

/// The only failure that escapes a calculation: a blocked mandatory
/// field. Every other numeric coercion recovers to zero-or-skip.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Field(FieldError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
        }
    }
}

impl From<FieldError> for CalcError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}
