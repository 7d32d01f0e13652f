/// Collapses every run of whitespace to a single space and trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full name from its parts. Either side may be empty or padded; the result
/// never has leading/trailing whitespace nor doubled spaces.
pub fn join_name(first: &str, last: &str) -> String {
    collapse_whitespace(&format!("{} {}", first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Marie   Dupont "), "Marie Dupont");
        assert_eq!(collapse_whitespace("Jean\t \nMartin"), "Jean Martin");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_join_name() {
        assert_eq!(join_name("Marie", "Dupont"), "Marie Dupont");
        assert_eq!(join_name("  Jean ", " Martin  "), "Jean Martin");
        assert_eq!(join_name("", "Dupont"), "Dupont");
        assert_eq!(join_name("Marie", ""), "Marie");
        assert_eq!(join_name("", ""), "");
        assert_eq!(join_name("Anne  Sophie", "de  la Tour"), "Anne Sophie de la Tour");
    }

    #[test]
    fn test_join_never_leaves_doubled_spaces() {
        let cases = [
            ("a", "b"),
            ("  a  ", "  b  "),
            ("a  b", "c  d"),
            ("\t", "\n"),
            ("", "  "),
        ];
        for (first, last) in cases {
            let joined = join_name(first, last);
            assert!(!joined.contains("  "), "doubled space in {:?}", joined);
            assert_eq!(joined, joined.trim());
        }
    }
}
