//! `caisse-recon` — settlement and credit reconciliation engine.
//!
//! Pure engine crate: takes a row-set snapshot, returns structured
//! results. No IO, and no UI markup — "consumed" is a flag on a term,
//! not a strike-through string.

pub mod engine;
pub mod error;
pub mod ledger;
pub mod model;
pub mod reconcile;
pub mod settlement;

pub use engine::{apply_outcomes, apply_pending, run};
pub use error::CalcError;
pub use model::{Branch, CalcMeta, CalcResult, CreditOutcome, DetailTerm, PendingPayee};
