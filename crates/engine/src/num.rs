//! Numeric-string parsing shared by row totals and the voice normalizer's
//! output contract. All amounts are decimal strings that may be "+"-joined
//! sums; every coercion here has a zero-or-skip fallback.

/// Sum a "+"-joined details expression. Tokens are trimmed and parsed as
/// floating decimals; non-numeric tokens are skipped, so `"5+abc"` sums to
/// 5.0 and `""` or `"abc"` to 0.0.
pub fn sum_expr(expr: &str) -> f64 {
    expr.split('+')
        .filter_map(|tok| tok.trim().parse::<f64>().ok())
        .fold(0.0, |acc, term| acc + term)
}

/// Parse a scalar field, treating blank or unparseable input as 0.
pub fn parse_or_zero(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// One-decimal display rounding used for every derived total.
pub fn fmt1(value: f64) -> String {
    format!("{value:.1}")
}
