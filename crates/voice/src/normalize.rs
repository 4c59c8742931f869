//! The fixed rewrite pipeline. Step order matters: compound numbers
//! contract before the bare word table runs, so "cinq cents" becomes
//! "500" rather than "5" followed by "100".

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::language::Language;
use crate::lexicon::{number_word_value, CORRECTIONS, NUMBER_WORDS};

/// Whether the target field holds a number or free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Text,
}

static COMPOUND: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s+cents?\b").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)[.,](\d+)").unwrap());
static ADDITIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*\+\s*(\d+)").unwrap());

static CORRECTION_RE: Lazy<Regex> = Lazy::new(|| word_alternation(CORRECTIONS));
static NUMBER_WORD_RE: Lazy<Regex> = Lazy::new(|| word_alternation(NUMBER_WORDS));

/// Combined whole-word regex over a rewrite table. Table order carries
/// into alternation priority.
fn word_alternation(table: &[(&str, &str)]) -> Regex {
    let alternatives: Vec<String> = table.iter().map(|(word, _)| regex::escape(word)).collect();
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))).unwrap()
}

/// Rewrite a raw transcript into a canonical numeric string (`"12.5"`,
/// `"12+8"`) or, for text fields, the trimmed transcript verbatim.
///
/// The locale is a capture-side hint only; the French and Arabic rewrite
/// tables both apply on every call. Never fails: unrecognized vocabulary
/// degrades to best-effort digit extraction, bottoming out at the empty
/// string (which downstream aggregation reads as 0).
pub fn normalize(transcript: &str, kind: FieldKind, _language: Language) -> String {
    if kind == FieldKind::Text {
        return transcript.trim().to_string();
    }

    let mut text = transcript.to_lowercase().trim().to_string();
    text = contract_compounds(&text);
    text = ascii_digits(&text);
    text = rewrite(&CORRECTION_RE, &text, CORRECTIONS);
    text = rewrite(&NUMBER_WORD_RE, &text, NUMBER_WORDS);
    text = DECIMAL.replace_all(&text, "$1.$2").into_owned();
    text = ADDITIVE.replace_all(&text, "$1+$2").into_owned();

    // An additive expression is preserved verbatim; callers treat it as a
    // row details expression, not a single scalar.
    if text.contains('+') {
        return text;
    }

    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '+')
        .collect()
}

/// `<word> cent(s)` → `<wordvalue> * 100`. Words missing from the number
/// table are left untouched.
fn contract_compounds(text: &str) -> String {
    COMPOUND
        .replace_all(text, |caps: &Captures<'_>| match number_word_value(&caps[1]) {
            Some(value) => (value * 100).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Map Eastern Arabic-Indic digit glyphs (٠–٩) to ASCII digits.
fn ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '٠'..='٩' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            other => other,
        })
        .collect()
}

fn rewrite(re: &Regex, text: &str, table: &[(&str, &str)]) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        let word = &caps[0];
        table
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, replacement)| replacement.to_string())
            .unwrap_or_else(|| word.to_string())
    })
    .into_owned()
}
