use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::debug;

use crate::error::{DashError, Result};
use crate::loader::{Table, TableReader};

/// Reads `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods` workbooks.
pub struct ExcelReader {
    sheet: Option<String>,
}

impl ExcelReader {
    /// Without a sheet name the first worksheet is used.
    pub fn new(sheet: Option<String>) -> Self {
        Self { sheet }
    }
}

impl TableReader for ExcelReader {
    fn read(&self, path: &Path) -> Result<Table> {
        debug!("read_excel: path: {:?} worksheet: {:?}", path, self.sheet);
        let mut workbook = open_workbook_auto(path)?;

        let range = match &self.sheet {
            Some(name) => workbook.worksheet_range(name)?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| DashError::EmptyWorkbook(path.display().to_string()))??,
        };

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
        let headers = rows.next().unwrap_or_default();
        let rows: Vec<Vec<String>> = rows.collect();

        debug!("read_excel: header: {:?}", headers);
        Ok(Table::new(headers, rows))
    }
}

/// Render a cell as text. Whole-number floats drop the fraction so that a
/// batch year stored as `2023.0` reads as `2023`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
