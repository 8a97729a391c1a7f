//! Small text helpers shared by the query paths.

/// Case-insensitive substring containment.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a user-supplied name/label is effectively empty.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_ignores_case() {
        assert!(contains_ignore_case("SN-RAW-1000", "sn-raw"));
        assert!(contains_ignore_case("From SN-RAW-1000", "RAW-1000"));
        assert!(!contains_ignore_case("SN-FIN-1000", "raw"));
    }

    #[test]
    fn blank_detects_whitespace_only() {
        assert!(is_blank("   "));
        assert!(is_blank(""));
        assert!(!is_blank("Gudang A"));
    }
}
