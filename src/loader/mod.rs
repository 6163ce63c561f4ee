//! Spreadsheet loading.
//!
//! Both input files are read into a plain [`Table`] of strings by a
//! [`TableReader`], then mapped onto typed records by [`records`].

use std::path::Path;

use log::info;

use crate::config::Config;
use crate::error::{DashError, Result};
use crate::models::{SkillQuestion, StudentRecord};

pub mod csv_file;
pub mod excel;
pub mod records;

/// A header row plus data rows, every cell rendered as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Cell text, or `""` when the row is shorter than the header.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

pub trait TableReader {
    fn read(&self, path: &Path) -> Result<Table>;
}

/// Read a spreadsheet, choosing the reader from the file extension.
///
/// `sheet` selects a worksheet in Excel-family files and is ignored for CSV.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let table = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => {
            excel::ExcelReader::new(sheet.map(str::to_string)).read(path)?
        }
        "csv" => csv_file::CsvReader::new().read(path)?,
        _ => return Err(DashError::UnsupportedFormat(path.display().to_string())),
    };

    info!(
        "loaded {} ({} columns, {} rows)",
        path.display(),
        table.headers.len(),
        table.rows.len()
    );
    Ok(table)
}

/// Both spreadsheets, mapped onto records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub students: Vec<StudentRecord>,
    pub questions: Vec<SkillQuestion>,
}

impl Dataset {
    pub fn load(config: &Config) -> Result<Self> {
        let students_table = read_table(&config.data.students, config.data.students_sheet.as_deref())?;
        let questions_table =
            read_table(&config.data.questions, config.data.questions_sheet.as_deref())?;

        Ok(Dataset {
            students: records::load_students(&students_table, &config.columns)?,
            questions: records::load_questions(&questions_table, &config.columns)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let table = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string()]],
        );
        assert_eq!(table.cell(0, 0), "1");
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(5, 0), "");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = read_table(&PathBuf::from("students.txt"), None).unwrap_err();
        assert!(matches!(err, DashError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_dataset_load_from_csv() {
        let dir = tempfile::tempdir().unwrap();
        let students = dir.path().join("students.csv");
        let questions = dir.path().join("questions.csv");
        std::fs::write(&students, "Batch Year,Full Name,Skills\n2023,Asha,\"python, sql\"\n").unwrap();
        std::fs::write(&questions, "Skill,Interview Questions\nPython,What is a generator?\n").unwrap();

        let mut config = Config::default();
        config.data.students = students;
        config.data.questions = questions;

        let dataset = Dataset::load(&config).unwrap();
        assert_eq!(dataset.students.len(), 1);
        assert_eq!(dataset.students[0].skills, "python, sql");
        assert_eq!(dataset.questions[0].question, "What is a generator?");
    }
}
