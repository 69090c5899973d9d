//! Reader for comma-separated definitions files.
//!
//! Format: `2, 18, =2*{0}, 9, ={2}+1*5`. Each entry is a bare number or `=`
//! followed by an expression. Commas cannot be escaped and line breaks are
//! plain whitespace around entries.

use cellflow_engine::engine::{Cell, parse_cells};
use std::fs;
use std::path::Path;

use crate::error::{CellflowError, Result};

/// Read a definitions file into a string.
pub fn read_definitions(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CellflowError::Source {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse definitions text into cells. Blank input is rejected since there is
/// nothing to evaluate.
pub fn parse_definitions(content: &str) -> Result<Vec<Cell>> {
    if content.trim().is_empty() {
        return Err(CellflowError::EmptySource);
    }
    Ok(parse_cells(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_definitions() {
        let cells = parse_definitions("2, =2*{0}\n").unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], Cell::new_input(2.0));
        assert_eq!(cells[1].formula(), Some("2*{0}"));
    }

    #[test]
    fn test_parse_definitions_multiline() {
        let cells = parse_definitions("1,\n2,\n={0}+{1}\n").unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].formula(), Some("{0}+{1}"));
    }

    #[test]
    fn test_blank_definitions_are_rejected() {
        assert!(matches!(
            parse_definitions("  \n"),
            Err(CellflowError::EmptySource)
        ));
    }

    #[test]
    fn test_read_definitions_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1, ={{0}}+1").unwrap();
        assert_eq!(read_definitions(file.path()).unwrap(), "1, ={0}+1");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.cells");
        let err = read_definitions(&path).unwrap_err();
        match err {
            CellflowError::Source { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected source error, got {:?}", other),
        }
    }
}
