use thiserror::Error;

/// Errors raised while loading the survey spreadsheets or resolving a view.
#[derive(Error, Debug)]
pub enum DashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("workbook {0} has no worksheets")]
    EmptyWorkbook(String),

    #[error("required column '{0}' not found")]
    MissingColumn(String),

    #[error("no students found for batch '{0}'")]
    UnknownBatch(String),

    #[error("no student named '{0}'")]
    UnknownStudent(String),

    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_column() {
        let error = DashError::MissingColumn("Batch Year".to_string());
        assert_eq!(error.to_string(), "required column 'Batch Year' not found");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "student.xlsx");
        let error: DashError = io_error.into();
        assert!(matches!(error, DashError::Io(_)));
        assert!(error.to_string().contains("student.xlsx"));
    }

    #[test]
    fn test_error_display_unknown_batch() {
        let error = DashError::UnknownBatch("2031".to_string());
        assert!(error.to_string().contains("2031"));
    }
}
