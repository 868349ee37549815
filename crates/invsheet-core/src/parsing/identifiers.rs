//! Shape checks for Indian tax and banking identifiers.
//!
//! PAN: five letters, four digits, one letter (`ABCDE1234F`).
//! GSTIN: two-digit state code, the holder's PAN, entity number, `Z`,
//! check character (`22AAAAA0000A1Z5`).
//! IFSC: four-letter bank code, `0`, six-character branch code.

use once_cell::sync::Lazy;
use regex::Regex;

static PAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

static GST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").unwrap()
});

static IFSC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap());

pub fn is_pan(s: &str) -> bool {
    PAN_RE.is_match(&s.to_ascii_uppercase())
}

pub fn is_gst(s: &str) -> bool {
    GST_RE.is_match(&s.to_ascii_uppercase())
}

pub fn is_ifsc(s: &str) -> bool {
    IFSC_RE.is_match(&s.to_ascii_uppercase())
}

/// First token of `value` passing `shape`, uppercased.
pub fn find_token(value: &str, shape: fn(&str) -> bool) -> Option<String> {
    value
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '/' | '|'))
        .map(|t| t.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .find(|t| shape(t))
        .map(|t| t.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_shape() {
        assert!(is_pan("ABCDE1234F"));
        assert!(is_pan("abcde1234f"));
        assert!(!is_pan("ABCDE1234"));
        assert!(!is_pan("ABCD01234F"));
        assert!(!is_pan("22AAAAA0000A1Z5"));
    }

    #[test]
    fn test_gst_shape() {
        assert!(is_gst("22AAAAA0000A1Z5"));
        assert!(is_gst("06aafci1834e1zx"));
        assert!(!is_gst("22AAAAA0000A1X5"));
        assert!(!is_gst("ABCDE1234F"));
    }

    #[test]
    fn test_ifsc_shape() {
        assert!(is_ifsc("HDFC0001234"));
        assert!(is_ifsc("SBIN0ABC123"));
        assert!(!is_ifsc("HDFC1001234"));
        assert!(!is_ifsc("HDF0001234"));
    }

    #[test]
    fn test_find_token_skips_noise() {
        assert_eq!(
            find_token("No. (ABCDE1234F)", is_pan).as_deref(),
            Some("ABCDE1234F")
        );
        assert_eq!(
            find_token("22aaaaa0000a1z5 / ABCDE1234F", is_gst).as_deref(),
            Some("22AAAAA0000A1Z5")
        );
        assert_eq!(find_token("not available", is_pan), None);
    }
}
