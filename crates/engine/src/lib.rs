//! `caisse-engine` — shift-ledger row tables and derived totals.
//!
//! Pure data crate: string-typed form fields, synchronous total
//! recomputation, scalar validation. No IO or UI dependencies.

pub mod num;
pub mod row;
pub mod rowset;
pub mod validate;

pub use row::{CreditPayeeRow, CreditRow, DepenseRow, RetraitRow};
pub use rowset::{RowSet, Table};
pub use validate::{Field, FieldError};
