use thiserror::Error;

/// Load/prepare failures. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("{}", missing_field_message(.field, .row))]
    MissingField { field: String, row: Option<usize> },

    #[error("row {row}: '{field}' value '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        field: String,
        value: String,
    },

    #[error("row {row}: date '{value}' is not in YYYY-MM-DD form")]
    MalformedDate { row: usize, value: String },
}

fn missing_field_message(field: &str, row: &Option<usize>) -> String {
    match row {
        Some(row) => format!("row {row}: missing value for required field '{field}'"),
        None => format!("input lacks required field '{field}'"),
    }
}

impl DataError {
    pub(crate) fn missing(field: &str, row: Option<usize>) -> Self {
        DataError::MissingField {
            field: field.to_string(),
            row,
        }
    }
}
