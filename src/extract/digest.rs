//! Content digest over visible text.
//!
//! The Coordinator compares digest strings between consecutive snapshots to
//! detect content changes, so the exact bits and the tag are part of the
//! wire contract. The algorithm is a 31-multiply rolling hash over UTF-16
//! code units with 32-bit signed wrapping — fast and collision-rare, not a
//! cryptographic digest, despite the historical `sha256:` tag it ships
//! under. Retagging or swapping in a real hash is a Coordinator-owned wire
//! change, not a local one.

/// Algorithm tag prefixed to every digest string.
pub const DIGEST_TAG: &str = "sha256";

/// Fingerprint `text` as `"sha256:"` + lowercase hex of the absolute value
/// of the rolling-hash accumulator. Identical input always yields the
/// identical string; distinct inputs collide only rarely.
pub fn digest(text: &str) -> String {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    // widen before abs so i32::MIN renders as 80000000 rather than panicking
    format!("{DIGEST_TAG}:{:x}", i64::from(hash).unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(digest(""), "sha256:0");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(digest("A"), "sha256:41");
        assert_eq!(digest("ab"), "sha256:c21");
        assert_eq!(digest("Hello"), "sha256:42628b2");
    }

    #[test]
    fn test_wrapped_accumulator_takes_absolute_value() {
        // seven 'a's overflow the 32-bit accumulator into negative territory
        assert_eq!(digest("aaaaaaa"), "sha256:49b8ffff");
    }

    #[test]
    fn test_hashes_utf16_code_units() {
        // one crab, two surrogate code units
        assert_eq!(digest("🦀"), "sha256:1b0d02");
    }

    #[test]
    fn test_deterministic() {
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(digest(text), digest(text));
    }

    #[test]
    fn test_distinct_content_differs() {
        assert_ne!(digest("abc"), digest("abd"));
        assert_ne!(digest("Visible text"), digest("Visible text "));
    }

    #[test]
    fn test_output_is_tagged_lowercase_hex() {
        let out = digest("a long paragraph of mixed content, 1234567890, αβγ");
        let hex = out.strip_prefix("sha256:").unwrap();
        assert!(!hex.is_empty());
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
