//! `caisse-voice` — multilingual voice-transcript normalization.
//!
//! Rewrites a raw spoken transcript into a canonical numeric string
//! (`"12.5"`, `"12+8"`) or a trimmed free-text string, over a fixed,
//! closed vocabulary. Speech capture itself belongs to the caller; this
//! crate only ever sees the final transcript.

pub mod language;
pub mod lexicon;
pub mod normalize;

pub use language::{Language, Messages};
pub use normalize::{normalize, FieldKind};
