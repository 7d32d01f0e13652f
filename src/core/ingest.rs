use crate::domain::model::Record;
use crate::utils::error::Result;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Parses a delimited export. Comma is tried first; a parse failure, or a
/// lone header cell that still contains ';', falls back to semicolon. A
/// failure of the second attempt propagates to the caller.
pub fn parse_table(data: &[u8]) -> Result<ParsedTable> {
    match parse_with(data, b',') {
        Ok(table) if !looks_semicolon_delimited(&table.headers) => Ok(table),
        Ok(_) => parse_with(data, b';'),
        Err(_) => parse_with(data, b';'),
    }
}

/// Header row only, with the same delimiter fallback as `parse_table`. Used
/// to resolve column bindings before the full pass.
pub fn peek_headers(data: &[u8]) -> Result<Vec<String>> {
    match read_headers(data, b',') {
        Ok(headers) if !looks_semicolon_delimited(&headers) => Ok(headers),
        Ok(_) => read_headers(data, b';'),
        Err(_) => read_headers(data, b';'),
    }
}

fn looks_semicolon_delimited(headers: &[String]) -> bool {
    headers.len() == 1 && headers[0].contains(';')
}

fn read_headers(data: &[u8], delimiter: u8) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(data);
    let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if let Some(first) = headers.first_mut() {
        // exports saved with a UTF-8 signature carry the BOM into the header
        *first = first.trim_start_matches('\u{feff}').to_string();
    }
    Ok(headers)
}

fn parse_with(data: &[u8], delimiter: u8) -> Result<ParsedTable> {
    let headers = read_headers(data, delimiter)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut fields = HashMap::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            fields.insert(header.clone(), value.to_string());
        }
        records.push(Record { fields });
    }

    Ok(ParsedTable { headers, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_delimited() {
        let data = b"ID,Prenom,Nom\nC001,Marie,Dupont\nC002,Jean,Martin\n";
        let table = parse_table(data).unwrap();
        assert_eq!(table.headers, vec!["ID", "Prenom", "Nom"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].get("Prenom"), "Marie");
        assert_eq!(table.records[1].get("Nom"), "Martin");
    }

    #[test]
    fn test_parse_semicolon_fallback() {
        let data = b"ID;Prenom;Nom\nC001;Marie;Dupont\n";
        let table = parse_table(data).unwrap();
        assert_eq!(table.headers, vec!["ID", "Prenom", "Nom"]);
        assert_eq!(table.records[0].get("ID"), "C001");
    }

    #[test]
    fn test_peek_headers_matches_parse() {
        let comma = b"ID,Prenom\nC001,Marie\n";
        let semicolon = b"ID;Prenom\nC001;Marie\n";
        assert_eq!(peek_headers(comma).unwrap(), vec!["ID", "Prenom"]);
        assert_eq!(peek_headers(semicolon).unwrap(), vec!["ID", "Prenom"]);
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let data = "\u{feff}ID,Prenom\nC001,Marie\n".as_bytes();
        let headers = peek_headers(data).unwrap();
        assert_eq!(headers[0], "ID");
    }

    #[test]
    fn test_unparseable_input_propagates() {
        // invalid UTF-8 fails under both delimiters
        let data = b"ID,Prenom\nC0\xff01,Marie\n";
        assert!(parse_table(data).is_err());
    }

    #[test]
    fn test_ragged_semicolon_input_propagates() {
        // comma parse succeeds as one column, semicolon retry hits the
        // short row and that error is surfaced
        let data = b"ID;Prenom\nC001\n";
        assert!(parse_table(data).is_err());
    }

    #[test]
    fn test_missing_trailing_fields_read_as_empty() {
        let data = b"ID,Prenom,Nom\nC001,Marie,Dupont\n";
        let table = parse_table(data).unwrap();
        assert_eq!(table.records[0].get("Inconnu"), "");
    }
}
