//! Source table reading.
//!
//! The dataset is a delimited text file with a header row: one label column
//! naming the disease, every other column a `"0"`/`"1"` symptom presence
//! flag. Only a bounded prefix of the file is read; the cap keeps startup
//! memory proportional regardless of dataset size.

use std::collections::HashMap;
use std::path::Path;

use morbyx_common::{MorbyxError, Result};
use tracing::info;

/// One data row, column name → raw cell value.
///
/// Kept as a map rather than a fixed struct: the symptom columns vary per
/// dataset and are only known from the header row.
pub type Record = HashMap<String, String>;

/// Read at most `row_cap` data rows from the CSV file at `path`.
///
/// Rows with the wrong field count are surfaced as dataset errors; cell
/// contents are not validated here (the indexer treats anything other than
/// the literal `"1"` as "symptom absent").
pub fn read_dataset(path: &Path, row_cap: usize) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(MorbyxError::Dataset(format!(
            "dataset not found at {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| MorbyxError::Dataset(format!("{}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<Record>() {
        if rows.len() >= row_cap {
            break;
        }
        let record =
            result.map_err(|e| MorbyxError::Dataset(format!("{}: {}", path.display(), e)))?;
        rows.push(record);
    }

    info!(
        path = %path.display(),
        rows = rows.len(),
        row_cap,
        "Read dataset"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_rows_as_column_maps() {
        let file = write_csv("diseases,fever,cough\nFlu,1,1\nCold,1,0\n");
        let rows = read_dataset(file.path(), 5000).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["diseases"], "Flu");
        assert_eq!(rows[0]["fever"], "1");
        assert_eq!(rows[1]["cough"], "0");
    }

    #[test]
    fn test_row_cap_bounds_ingestion() {
        let file = write_csv("diseases,fever\nFlu,1\nCold,1\nMumps,0\n");
        let rows = read_dataset(file.path(), 2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["diseases"], "Cold");
    }

    #[test]
    fn test_missing_file_is_dataset_error() {
        let err = read_dataset(Path::new("no/such/file.csv"), 10).unwrap_err();
        assert!(matches!(err, MorbyxError::Dataset(_)));
    }
}
