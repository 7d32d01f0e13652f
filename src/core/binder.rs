//! Maps the columns of an arbitrary export onto the roles the pipeline
//! needs. Candidates cover the French and English header variants seen in
//! the CRM exports this tool is fed.

/// Ranked per role; the first candidate present wins.
pub const ID_CANDIDATES: &[&str] = &[
    "Id constituant",
    "Constituent Id",
    "Constituent ID",
    "ConstituentId",
    "ID",
];

pub const FIRST_NAME_CANDIDATES: &[&str] = &[
    "Prénom",
    "Prenom",
    "First Name",
    "Donor_First_Name",
    "FirstName",
];

pub const LAST_NAME_CANDIDATES: &[&str] =
    &["Nom", "Last Name", "Donor_Last_Name", "LastName"];

pub const FULL_NAME_CANDIDATES: &[&str] =
    &["Nom_complet", "Nom complet", "Full Name", "FullName", "Name"];

/// First candidate present in the headers, case-insensitive. Returns the
/// header's own spelling, not the candidate's.
pub fn auto_pick<'a>(headers: &'a [String], candidates: &[&str]) -> Option<&'a str> {
    for candidate in candidates {
        let wanted = candidate.to_lowercase();
        if let Some(header) = headers.iter().find(|h| h.to_lowercase() == wanted) {
            return Some(header);
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub column: String,
    /// False when no candidate matched and the first column was used as a
    /// stand-in; such a suggestion needs explicit confirmation.
    pub auto_matched: bool,
}

/// Suggestion for a role. Headers must be non-empty; the caller rejects
/// column-less files before binding starts.
pub fn suggest(headers: &[String], candidates: &[&str]) -> Suggestion {
    match auto_pick(headers, candidates) {
        Some(column) => Suggestion {
            column: column.to_string(),
            auto_matched: true,
        },
        None => Suggestion {
            column: headers[0].clone(),
            auto_matched: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_pick_respects_candidate_ranking() {
        let cols = headers(&["ID", "Constituent Id", "Nom"]);
        // "Constituent Id" outranks "ID" in the candidate list
        assert_eq!(auto_pick(&cols, ID_CANDIDATES), Some("Constituent Id"));
    }

    #[test]
    fn test_auto_pick_is_case_insensitive() {
        let cols = headers(&["constituent id", "prénom"]);
        assert_eq!(auto_pick(&cols, ID_CANDIDATES), Some("constituent id"));
        assert_eq!(auto_pick(&cols, FIRST_NAME_CANDIDATES), Some("prénom"));
    }

    #[test]
    fn test_auto_pick_returns_none_when_nothing_matches() {
        let cols = headers(&["Colonne A", "Colonne B"]);
        assert_eq!(auto_pick(&cols, ID_CANDIDATES), None);
    }

    #[test]
    fn test_suggest_falls_back_to_first_column_unconfirmed() {
        let cols = headers(&["Colonne A", "Colonne B"]);
        let suggestion = suggest(&cols, ID_CANDIDATES);
        assert_eq!(suggestion.column, "Colonne A");
        assert!(!suggestion.auto_matched);
    }

    #[test]
    fn test_suggest_marks_matches_confirmed() {
        let cols = headers(&["Prenom", "Nom"]);
        let suggestion = suggest(&cols, FIRST_NAME_CANDIDATES);
        assert_eq!(suggestion.column, "Prenom");
        assert!(suggestion.auto_matched);
    }
}
