use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed labels of the export produced for the CRM re-import.
pub const ID_OUTPUT_LABEL: &str = "Id constituant";
pub const FULL_NAME_LABEL: &str = "Nom_complet";
pub const GENDER_OUTPUT_LABEL: &str = "Genre";
pub const OUTPUT_FILENAME: &str = "SF_update_genre.csv";

/// One input row. Field names come from the file header; values are kept as
/// raw strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub fields: HashMap<String, String>,
}

impl Record {
    /// Missing fields read as empty strings, never as failures.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Binary output label. The CRM field accepts exactly these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum GenderLabel {
    Male,
    Female,
}

impl GenderLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderLabel::Male => "Male",
            GenderLabel::Female => "Female",
        }
    }
}

impl std::fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Six-way outcome of the name lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameGender {
    Unknown,
    Andy,
    Male,
    Female,
    MostlyMale,
    MostlyFemale,
}

impl NameGender {
    /// Category strings as they appear in lookup files.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unknown" => Some(NameGender::Unknown),
            "andy" => Some(NameGender::Andy),
            "male" => Some(NameGender::Male),
            "female" => Some(NameGender::Female),
            "mostly_male" => Some(NameGender::MostlyMale),
            "mostly_female" => Some(NameGender::MostlyFemale),
            _ => None,
        }
    }
}

/// Where the full name comes from: separate first/last columns, or a column
/// that already carries the combined name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Parts { first: String, last: String },
    Full { column: String },
}

/// Role-to-column mapping resolved against the actual headers before the run
/// starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    pub id_column: String,
    pub name_source: NameSource,
}

/// Exactly the three fields that survive to the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub full_name: String,
    pub gender: GenderLabel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

impl GenderCounts {
    pub fn bump(&mut self, label: GenderLabel) {
        match label {
            GenderLabel::Male => self.male += 1,
            GenderLabel::Female => self.female += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub output_records: Vec<OutputRecord>,
    pub gender_counts: GenderCounts,
    pub skipped_missing_id: usize,
}
