use crate::domain::model::{GenderLabel, NameGender};
use crate::domain::ports::GenderLookup;
use crate::utils::error::{CleanerError, Result};
use deunicode::deunicode;
use std::collections::HashMap;

/// Reference table compiled into the binary so a plain run needs no extra
/// files. `name,gender` rows, categories matching `NameGender::parse`.
const EMBEDDED_TABLE: &str = include_str!("data/names.csv");

/// Name-gender lookup table. Keys are ASCII-folded and lowercased, so
/// "José", "JOSE" and "jose" all hit the same entry.
pub struct Detector {
    table: HashMap<String, NameGender>,
}

impl Detector {
    pub fn new() -> Self {
        let mut table = HashMap::new();
        merge_reader(&mut table, EMBEDDED_TABLE.as_bytes(), "embedded table")
            .expect("embedded name table parses");
        Self { table }
    }

    /// Embedded table plus user-supplied lookup files merged over it, later
    /// files winning. An unreadable or malformed file is a blocking error.
    pub fn with_lookup_files(paths: &[String]) -> Result<Self> {
        let mut detector = Self::new();
        for path in paths {
            let data = std::fs::read(path).map_err(|e| CleanerError::LookupError {
                message: format!("cannot read lookup file '{}': {}", path, e),
            })?;
            merge_reader(&mut detector.table, data.as_slice(), path)?;
            tracing::debug!("Merged lookup file: {}", path);
        }
        Ok(detector)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl GenderLookup for Detector {
    fn get_gender(&self, first_name: &str) -> NameGender {
        self.table
            .get(&fold(first_name))
            .copied()
            .unwrap_or(NameGender::Unknown)
    }
}

fn fold(name: &str) -> String {
    deunicode(name).to_lowercase()
}

fn merge_reader(
    table: &mut HashMap<String, NameGender>,
    data: &[u8],
    source: &str,
) -> Result<()> {
    let mut reader = csv::Reader::from_reader(data);
    for row in reader.records() {
        let row = row.map_err(|e| CleanerError::LookupError {
            message: format!("malformed lookup data in {}: {}", source, e),
        })?;
        let name = row.get(0).unwrap_or("").trim();
        let category = row.get(1).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        match NameGender::parse(category) {
            Some(gender) => {
                table.insert(fold(name), gender);
            }
            None => tracing::warn!(
                "{}: unknown gender category '{}' for '{}', skipping",
                source,
                category,
                name
            ),
        }
    }
    Ok(())
}

/// Collapses the six lookup outcomes into the binary CRM label: female and
/// mostly_female map to Female, everything else (male, mostly_male, andy,
/// unknown) to Male. An empty name skips the lookup and takes the default.
pub fn classify_binary<L: GenderLookup + ?Sized>(
    full_name: &str,
    lookup: &L,
    default: GenderLabel,
) -> GenderLabel {
    let Some(token) = full_name.split_whitespace().next() else {
        return default;
    };
    match lookup.get_gender(token) {
        NameGender::Female | NameGender::MostlyFemale => GenderLabel::Female,
        _ => GenderLabel::Male,
    }
}
