use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::loader::{Table, TableReader};

/// Reads comma-separated files; the first record is the header.
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> Self {
        Self
    }
}

impl TableReader for CsvReader {
    fn read(&self, path: &Path) -> Result<Table> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        debug!("read_csv: header: {:?}", headers);

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_quoted_multiline_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        std::fs::write(
            &path,
            "Full Name,Achievements\nAsha,\"- Hackathon winner\n- NSS volunteer\"\nRavi\n",
        )
        .unwrap();

        let table = CsvReader::new().read(&path).unwrap();
        assert_eq!(table.headers, vec!["Full Name", "Achievements"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(0, 1), "- Hackathon winner\n- NSS volunteer");
        // short row is padded on access
        assert_eq!(table.cell(1, 1), "");
    }
}
