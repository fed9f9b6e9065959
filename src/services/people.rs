use crate::models::PersonRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Number of leading columns read from each row
const COLUMNS: usize = 3;

/// Errors that can occur while reading the people table
#[derive(Debug, Error)]
pub enum PeopleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row at line {line}: expected 3 columns, found {columns}")]
    MalformedRow { line: usize, columns: usize },

    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },
}

/// Load people from a comma-separated file with a header row
pub fn load_people<P: AsRef<Path>>(path: P) -> Result<Vec<PersonRecord>, PeopleError> {
    let path = path.as_ref();
    tracing::debug!("Loading people from {}", path.display());

    let file = File::open(path)?;
    parse_people(BufReader::new(file))
}

/// Parse people rows: `name, home_postcode, looking_for_court_type`
///
/// The first line is a header and is skipped. Fields are split on bare commas
/// with no quoting support and trimmed. Columns past the third are ignored.
pub fn parse_people<R: BufRead>(reader: R) -> Result<Vec<PersonRecord>, PeopleError> {
    let mut people = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < COLUMNS {
            return Err(PeopleError::MalformedRow {
                line: line_no,
                columns: fields.len(),
            });
        }

        let person = PersonRecord {
            name: fields[0].to_string(),
            home_postcode: fields[1].to_string(),
            looking_for_court_type: fields[2].to_string(),
        };

        person.validate().map_err(|e| PeopleError::InvalidRecord {
            line: line_no,
            message: e.to_string(),
        })?;

        people.push(person);
    }

    tracing::debug!("Parsed {} people", people.len());

    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_header_and_trims() {
        let input = "person_name,home_postcode,looking_for_court_type\n\
                     Ann Smith , E14 4PU , Tribunal\n\
                     Bob Jones,SW1A 1AA,County Court\n";

        let people = parse_people(input.as_bytes()).unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Ann Smith");
        assert_eq!(people[0].home_postcode, "E14 4PU");
        assert_eq!(people[0].looking_for_court_type, "Tribunal");
        assert_eq!(people[1].looking_for_court_type, "County Court");
    }

    #[test]
    fn test_short_row_is_malformed() {
        let input = "person_name,home_postcode,looking_for_court_type\n\
                     Ann Smith,E14 4PU,Tribunal\n\
                     Bob Jones,SW1A 1AA\n";

        let err = parse_people(input.as_bytes()).unwrap_err();
        assert!(matches!(err, PeopleError::MalformedRow { line: 3, columns: 2 }));
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let input = "header\nAnn Smith,,Tribunal\n";

        let err = parse_people(input.as_bytes()).unwrap_err();
        assert!(matches!(err, PeopleError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_header_only_yields_nothing() {
        assert!(parse_people("person_name,home_postcode,looking_for_court_type\n".as_bytes())
            .unwrap()
            .is_empty());
        assert!(parse_people("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_people("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, PeopleError::Io(_)));
    }

    #[test]
    fn test_load_people_from_file() {
        let path = std::env::temp_dir().join(format!("court-finder-people-{}.csv", std::process::id()));
        std::fs::write(
            &path,
            "person_name,home_postcode,looking_for_court_type\nAnn Smith,E14 4PU,Tribunal\nBob Jones,SW1A 1AA,County Court\n",
        )
        .unwrap();

        let people = load_people(&path);
        std::fs::remove_file(&path).ok();
        let people = people.unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Ann Smith");
        assert_eq!(people[1].home_postcode, "SW1A 1AA");
    }
}
