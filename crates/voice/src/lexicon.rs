//! The closed rewrite vocabulary: number words, homophone corrections,
//! and the Eastern Arabic-Indic digit glyphs.
//!
//! Tables are ordered longest-entry-first so compound words rewrite before
//! their prefixes ("quatre-vingt-dix" before "quatre-vingt" before
//! "vingt"); the combined regexes preserve that priority.

/// Whole-word number vocabulary, French and Arabic, mapped to the digit
/// strings substituted into the transcript.
pub const NUMBER_WORDS: &[(&str, &str)] = &[
    // French
    ("quatre-vingt-dix", "90"),
    ("quatre-vingt", "80"),
    ("soixante-dix", "70"),
    ("cinquante", "50"),
    ("soixante", "60"),
    ("quarante", "40"),
    ("quatorze", "14"),
    ("treize", "13"),
    ("trente", "30"),
    ("quatre", "4"),
    ("quinze", "15"),
    ("seize", "16"),
    ("douze", "12"),
    ("mille", "1000"),
    ("cents", "100"),
    ("vingt", "20"),
    ("trois", "3"),
    ("cent", "100"),
    ("cinq", "5"),
    ("deux", "2"),
    ("huit", "8"),
    ("neuf", "9"),
    ("sept", "7"),
    ("zéro", "0"),
    ("onze", "11"),
    ("dix", "10"),
    ("six", "6"),
    ("un", "1"),
    // Arabic
    ("ثمانية", "8"),
    ("اثنين", "2"),
    ("اربعة", "4"),
    ("اربعين", "40"),
    ("تسعين", "90"),
    ("ثلاثة", "3"),
    ("ثلاثين", "30"),
    ("ثمانين", "80"),
    ("خمسين", "50"),
    ("سبعين", "70"),
    ("ستين", "60"),
    ("عشرين", "20"),
    ("تسعة", "9"),
    ("خمسة", "5"),
    ("سبعة", "7"),
    ("عشرة", "10"),
    ("واحد", "1"),
    ("الف", "1000"),
    ("ستة", "6"),
    ("صفر", "0"),
    ("مية", "100"),
];

/// Homophone and filler corrections applied before number-word
/// substitution. Whole-token match; an empty replacement deletes the
/// token. May introduce the decimal points and plus signs the later
/// steps normalize.
pub const CORRECTIONS: &[(&str, &str)] = &[
    // French
    ("virgule", "."),
    ("point", "."),
    ("plus", "+"),
    ("et", "+"),
    ("euros", ""),
    ("euro", ""),
    ("zéros", "zéro"),
    // Arabic
    ("فاصلة", "."),
    ("نقطة", "."),
    ("زائد", "+"),
    ("و", "+"),
    ("دنانير", ""),
    ("دينار", ""),
];

/// Look up a number word's numeric value. Used by the `<word> cent(s)`
/// compound contraction.
pub fn number_word_value(word: &str) -> Option<i64> {
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .and_then(|(_, digits)| digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_word_lookup() {
        assert_eq!(number_word_value("cinq"), Some(5));
        assert_eq!(number_word_value("خمسة"), Some(5));
        assert_eq!(number_word_value("quatre-vingt-dix"), Some(90));
        assert_eq!(number_word_value("bonjour"), None);
    }

    #[test]
    fn longer_entries_precede_their_prefixes() {
        let pos = |w: &str| NUMBER_WORDS.iter().position(|(e, _)| *e == w).unwrap();
        assert!(pos("quatre-vingt-dix") < pos("quatre-vingt"));
        assert!(pos("quatre-vingt") < pos("vingt"));
        assert!(pos("soixante-dix") < pos("soixante"));
        assert!(pos("soixante-dix") < pos("dix"));
        assert!(pos("cents") < pos("cent"));
    }
}
