use rust_decimal::Decimal;
use std::str::FromStr;

const CURRENCY_PREFIXES: &[&str] = &["Rs.", "Rs", "INR", "₹"];

/// Clean an amount as printed on an invoice.
///
/// Handles formats like:
/// - "Rs. 1,500.00/-" -> "1500.00"
/// - "₹2,000" -> "2000"
/// - "(750.50)" -> "750.50"
/// - "INR 12,34,567" -> "1234567" (Indian digit grouping)
///
/// Text that is not a number after cleaning is returned trimmed, unchanged.
pub fn clean_amount(raw: &str) -> String {
    let mut s = raw.trim();

    for prefix in CURRENCY_PREFIXES {
        if let Some(head) = s.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                s = s[prefix.len()..].trim_start();
                break;
            }
        }
    }

    for suffix in ["/-", "/–", "/—"] {
        if let Some(rest) = s.strip_suffix(suffix) {
            s = rest.trim_end();
            break;
        }
    }

    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        s = inner.trim();
    }

    let ungrouped: String = s.chars().filter(|c| *c != ',').collect();
    match parse_amount(&ungrouped) {
        Some(_) => ungrouped,
        None => s.to_string(),
    }
}

/// Parse a cleaned amount as an exact decimal.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    Decimal::from_str(s).ok()
}

/// Collapse an account number printed in groups ("4500 1011 0017 123",
/// "4500-1011-0017-123") into its digits.
///
/// Values that are not 9-18 digits once collapsed keep their first token.
pub fn clean_account_number(raw: &str) -> String {
    let raw = raw.trim();
    let only_digit_groups = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.'));

    if only_digit_groups {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if (9..=18).contains(&digits.len()) {
            return digits;
        }
    }

    first_token(raw).to_string()
}

/// First whitespace-delimited token, with trailing punctuation removed.
pub fn first_token(raw: &str) -> &str {
    raw.split_whitespace()
        .next()
        .unwrap_or("")
        .trim_end_matches(|c: char| matches!(c, ',' | ';' | '.' | ')'))
}
