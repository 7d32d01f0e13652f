//! Resolves the role-to-column bindings before the pipeline runs. Order of
//! precedence per role: explicit flag, auto-detected candidate, interactive
//! selection on stdin. `--yes` skips the prompts but refuses to take the
//! first-column fallback silently.

use crate::config::CliConfig;
use crate::core::binder::{self, Suggestion};
use crate::domain::model::{ColumnBinding, NameSource};
use crate::utils::error::{CleanerError, Result};
use std::io::{BufRead, Write};

pub fn resolve_binding(cli: &CliConfig, headers: &[String]) -> Result<ColumnBinding> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stderr();
    resolve_binding_with(cli, headers, &mut input, &mut out)
}

pub fn resolve_binding_with<R: BufRead, W: Write>(
    cli: &CliConfig,
    headers: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<ColumnBinding> {
    if headers.is_empty() {
        return Err(CleanerError::ProcessingError {
            message: "The input file has no columns".to_string(),
        });
    }

    let id_column = resolve_role(
        cli,
        headers,
        "identifier",
        &cli.id_column,
        "--id-column",
        binder::ID_CANDIDATES,
        input,
        out,
    )?;

    let name_source = if cli.wants_full_name() {
        let column = resolve_role(
            cli,
            headers,
            "full name",
            &cli.full_name_column,
            "--full-name-column",
            binder::FULL_NAME_CANDIDATES,
            input,
            out,
        )?;
        NameSource::Full { column }
    } else {
        let first = resolve_role(
            cli,
            headers,
            "first name",
            &cli.first_name_column,
            "--first-name-column",
            binder::FIRST_NAME_CANDIDATES,
            input,
            out,
        )?;
        let last = resolve_role(
            cli,
            headers,
            "last name",
            &cli.last_name_column,
            "--last-name-column",
            binder::LAST_NAME_CANDIDATES,
            input,
            out,
        )?;
        NameSource::Parts { first, last }
    };

    Ok(ColumnBinding {
        id_column,
        name_source,
    })
}

#[allow(clippy::too_many_arguments)]
fn resolve_role<R: BufRead, W: Write>(
    cli: &CliConfig,
    headers: &[String],
    role: &str,
    flag_value: &Option<String>,
    flag_name: &str,
    candidates: &[&str],
    input: &mut R,
    out: &mut W,
) -> Result<String> {
    if let Some(name) = flag_value {
        return find_column(headers, name).ok_or_else(|| CleanerError::ConfigError {
            message: format!(
                "Column '{}' (from {}) was not found in the input file",
                name, flag_name
            ),
        });
    }

    let suggestion = binder::suggest(headers, candidates);

    if cli.yes {
        if suggestion.auto_matched {
            tracing::debug!("Auto-bound {} to column '{}'", role, suggestion.column);
            return Ok(suggestion.column);
        }
        return Err(CleanerError::ConfigError {
            message: format!(
                "No {} column detected; pass {} explicitly when running with --yes",
                role, flag_name
            ),
        });
    }

    prompt_select(input, out, role, headers, &suggestion)
}

fn find_column(headers: &[String], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| *h == name)
        .or_else(|| {
            let wanted = name.to_lowercase();
            headers.iter().find(|h| h.to_lowercase() == wanted)
        })
        .cloned()
}

/// Lists the available columns and reads one choice: Enter keeps the
/// suggestion, otherwise a column number or an exact column name.
pub fn prompt_select<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    role: &str,
    headers: &[String],
    suggestion: &Suggestion,
) -> Result<String> {
    if suggestion.auto_matched {
        writeln!(
            out,
            "Column for {}: '{}' (auto-detected)",
            role, suggestion.column
        )?;
    } else {
        writeln!(
            out,
            "No {} column detected; defaulting to the first column '{}'",
            role, suggestion.column
        )?;
    }
    for (i, header) in headers.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, header)?;
    }

    loop {
        write!(
            out,
            "Press Enter to keep '{}', or type a column number or name: ",
            suggestion.column
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: an auto-detected match is safe to keep, a fallback is not
            if suggestion.auto_matched {
                return Ok(suggestion.column.clone());
            }
            return Err(CleanerError::ConfigError {
                message: format!("No confirmation for the {} column on stdin", role),
            });
        }

        let choice = line.trim();
        if choice.is_empty() {
            return Ok(suggestion.column.clone());
        }
        if let Ok(n) = choice.parse::<usize>() {
            if n >= 1 && n <= headers.len() {
                return Ok(headers[n - 1].clone());
            }
        } else if let Some(column) = find_column(headers, choice) {
            return Ok(column);
        }
        writeln!(out, "'{}' is not a valid column", choice)?;
    }
}
