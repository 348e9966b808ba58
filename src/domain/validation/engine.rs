//! Rule engine
//!
//! Decides whether a single value satisfies a single rule. The engine never
//! fails: unknown kinds pass, and unparseable numbers simply fail `min`/`max`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{FieldRef, RuleDescriptor, RuleKind};

/// Character class body matching browser regex `\s` (WhiteSpace and LineTerminator)
macro_rules! js_space {
    () => {
        r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

/// Cached regex patterns for validation
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(concat!(r"^[^", js_space!(), r"@]+@[^", js_space!(), r"@]+\.[^", js_space!(), r"@]+$")).unwrap());
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").unwrap());
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(concat!(r"^[0-9\-+()", js_space!(), r"]+$")).unwrap());
static CI_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static RUC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{13}$").unwrap());
static ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(concat!(r"^[a-zA-Z0-9", js_space!(), r"]+$")).unwrap());
static FLOAT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// Minimum number of characters in a phone number
const PHONE_MIN_LENGTH: usize = 7;

/// Pass/fail decisions for rule descriptors
pub struct RuleEngine;

impl RuleEngine {
    /// Apply `rule` to `value`. `field` is only forwarded to custom predicates.
    ///
    /// A panic raised by a custom predicate is not caught.
    pub fn apply(value: &str, rule: &RuleDescriptor, field: &FieldRef) -> bool {
        match rule.kind() {
            RuleKind::Required => text_len(trim(value)) > 0,
            RuleKind::MinLength(min) => text_len(trim(value)) as i64 >= *min,
            RuleKind::MaxLength(max) => text_len(trim(value)) as i64 <= *max,
            RuleKind::Email => EMAIL_REGEX.is_match(value),
            RuleKind::Numeric => NUMERIC_REGEX.is_match(value),
            RuleKind::Decimal => DECIMAL_REGEX.is_match(value),
            RuleKind::Phone => PHONE_REGEX.is_match(value) && text_len(value) >= PHONE_MIN_LENGTH,
            RuleKind::Ci => CI_REGEX.is_match(value),
            RuleKind::Ruc => RUC_REGEX.is_match(value),
            RuleKind::Alphanumeric => ALPHANUMERIC_REGEX.is_match(value),
            // NaN compares false, so unparseable input fails both bounds
            RuleKind::Min(min) => parse_float_prefix(value) >= *min,
            RuleKind::Max(max) => parse_float_prefix(value) <= *max,
            RuleKind::Custom(predicate) => predicate.evaluate(value, field),
            RuleKind::Unknown(_) => true,
        }
    }
}

/// Length in UTF-16 code units, as form controls report it
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whitespace as browsers define it for `trim` and `parseFloat`
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip browser whitespace from both ends
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Lenient float parsing: skips leading whitespace, reads the longest numeric
/// prefix and ignores whatever follows. Returns NaN when there is no prefix.
pub fn parse_float_prefix(value: &str) -> f64 {
    let trimmed = value.trim_start_matches(is_js_whitespace);
    FLOAT_PREFIX_REGEX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
