pub mod cli;
pub mod interactive;

use crate::core::ConfigProvider;
use crate::domain::model::{ColumnBinding, GenderLabel};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "genre-cleaner")]
#[command(about = "Builds Nom_complet and a binary Genre column from a CRM contact export")]
pub struct CliConfig {
    /// Path to the exported contact file (comma or semicolon delimited)
    pub input_file: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Column holding the constituent identifier
    #[arg(long)]
    pub id_column: Option<String>,

    /// Column holding the first name
    #[arg(long)]
    pub first_name_column: Option<String>,

    /// Column holding the last name
    #[arg(long)]
    pub last_name_column: Option<String>,

    /// Column already holding the combined full name (implies --full-name-mode)
    #[arg(long, conflicts_with_all = ["first_name_column", "last_name_column"])]
    pub full_name_column: Option<String>,

    /// The input already carries a combined full-name column
    #[arg(long)]
    pub full_name_mode: bool,

    /// Label used when the first name is unknown or the name is empty
    #[arg(long, value_enum, ignore_case = true, default_value_t = GenderLabel::Male)]
    pub default_gender: GenderLabel,

    /// Extra name,gender CSV files merged over the built-in lookup table
    #[arg(long, value_delimiter = ',')]
    pub lookup_files: Vec<String>,

    /// Accept auto-detected column bindings without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory stats per phase")]
    pub monitor: bool,
}

impl CliConfig {
    pub fn wants_full_name(&self) -> bool {
        self.full_name_mode || self.full_name_column.is_some()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_input_file("input_file", &self.input_file)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_extensions("lookup_files", &self.lookup_files, &["csv"])?;
        if let Some(column) = &self.id_column {
            validation::validate_non_empty_string("id_column", column)?;
        }
        Ok(())
    }
}

/// CLI flags plus the column binding resolved against the actual headers.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    cli: CliConfig,
    binding: ColumnBinding,
}

impl ResolvedConfig {
    pub fn new(cli: CliConfig, binding: ColumnBinding) -> Self {
        Self { cli, binding }
    }
}

impl ConfigProvider for ResolvedConfig {
    fn input_path(&self) -> &str {
        &self.cli.input_file
    }

    fn output_path(&self) -> &str {
        &self.cli.output_path
    }

    fn binding(&self) -> &ColumnBinding {
        &self.binding
    }

    fn default_gender(&self) -> GenderLabel {
        self.cli.default_gender
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gender_flag_parses_both_labels() {
        let config =
            CliConfig::parse_from(["genre-cleaner", "in.csv", "--default-gender", "Female"]);
        assert_eq!(config.default_gender, GenderLabel::Female);

        let config = CliConfig::parse_from(["genre-cleaner", "in.csv"]);
        assert_eq!(config.default_gender, GenderLabel::Male);
    }

    #[test]
    fn test_full_name_column_implies_full_name_mode() {
        let config = CliConfig::parse_from([
            "genre-cleaner",
            "in.csv",
            "--full-name-column",
            "Nom_complet",
        ]);
        assert!(config.wants_full_name());

        let config = CliConfig::parse_from(["genre-cleaner", "in.csv"]);
        assert!(!config.wants_full_name());
    }

    #[test]
    fn test_full_name_column_conflicts_with_part_columns() {
        let result = CliConfig::try_parse_from([
            "genre-cleaner",
            "in.csv",
            "--full-name-column",
            "Nom_complet",
            "--first-name-column",
            "Prenom",
        ]);
        assert!(result.is_err());
    }
}
