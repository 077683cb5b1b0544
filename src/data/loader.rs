use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::error::DataError;
use super::model::RawRecord;

// ---------------------------------------------------------------------------
// Column names of the source table
// ---------------------------------------------------------------------------

pub const COL_DATE: &str = "Date";
pub const COL_AVERAGE_PRICE: &str = "AveragePrice";
pub const COL_TOTAL_VOLUME: &str = "Total Volume";
pub const COL_TYPE: &str = "type";
pub const COL_YEAR: &str = "year";
pub const COL_REGION: &str = "region";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load raw avocado records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the published dataset layout (extra columns ignored)
/// * `.json` – `[{ "Date": "...", "AveragePrice": 1.2, ... }, ...]`,
///   i.e. what `df.to_json(orient='records')` writes
pub fn load_file(path: &Path) -> Result<Vec<RawRecord>, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(std::fs::File::open(path)?)?,
        "json" => load_json(&std::fs::read_to_string(path)?)?,
        other => return Err(DataError::UnsupportedFormat(other.to_string())),
    };

    log::info!("Loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header positions of the required columns.
struct CsvColumns {
    date: usize,
    average_price: usize,
    total_volume: usize,
    product_type: usize,
    year: usize,
    region: usize,
}

impl CsvColumns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, DataError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DataError::missing(name, None))
        };
        Ok(CsvColumns {
            date: find(COL_DATE)?,
            average_price: find(COL_AVERAGE_PRICE)?,
            total_volume: find(COL_TOTAL_VOLUME)?,
            product_type: find(COL_TYPE)?,
            year: find(COL_YEAR)?,
            region: find(COL_REGION)?,
        })
    }
}

/// Read CSV with a header row. Rows are numbered from 0, header excluded.
///
/// Cells are trimmed. Short rows are accepted by the reader so that a
/// missing trailing cell surfaces as `MissingField`.
pub fn load_csv<R: Read>(input: R) -> Result<Vec<RawRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let cols = CsvColumns::locate(reader.headers()?)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let rec = result?;
        let cell = |idx: usize, name: &str| csv_cell(&rec, idx, name, row);

        records.push(RawRecord {
            date: cell(cols.date, COL_DATE)?.to_string(),
            year: parse_number(cell(cols.year, COL_YEAR)?, row, COL_YEAR)?,
            region: cell(cols.region, COL_REGION)?.to_string(),
            product_type: cell(cols.product_type, COL_TYPE)?.to_string(),
            average_price: parse_number(
                cell(cols.average_price, COL_AVERAGE_PRICE)?,
                row,
                COL_AVERAGE_PRICE,
            )?,
            total_volume: parse_number(
                cell(cols.total_volume, COL_TOTAL_VOLUME)?,
                row,
                COL_TOTAL_VOLUME,
            )?,
        });
    }

    Ok(records)
}

fn csv_cell<'r>(
    rec: &'r csv::StringRecord,
    idx: usize,
    field: &str,
    row: usize,
) -> Result<&'r str, DataError> {
    match rec.get(idx).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DataError::missing(field, Some(row))),
    }
}

fn parse_number<T: std::str::FromStr>(s: &str, row: usize, field: &str) -> Result<T, DataError> {
    s.parse::<T>().map_err(|_| DataError::InvalidNumber {
        row,
        field: field.to_string(),
        value: s.to_string(),
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON. Numbers may also arrive as numeric strings.
/// String values are trimmed, as CSV cells are.
pub fn load_json(text: &str) -> Result<Vec<RawRecord>, DataError> {
    let rows: Vec<Map<String, JsonValue>> = serde_json::from_str(text)?;

    rows.iter()
        .enumerate()
        .map(|(row, obj)| {
            Ok(RawRecord {
                date: json_string(obj, COL_DATE, row)?,
                year: json_number(obj, COL_YEAR, row)?,
                region: json_string(obj, COL_REGION, row)?,
                product_type: json_string(obj, COL_TYPE, row)?,
                average_price: json_number(obj, COL_AVERAGE_PRICE, row)?,
                total_volume: json_number(obj, COL_TOTAL_VOLUME, row)?,
            })
        })
        .collect()
}

fn json_field<'a>(
    obj: &'a Map<String, JsonValue>,
    field: &str,
    row: usize,
) -> Result<&'a JsonValue, DataError> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Err(DataError::missing(field, Some(row))),
        Some(v) => Ok(v),
    }
}

fn json_string(obj: &Map<String, JsonValue>, field: &str, row: usize) -> Result<String, DataError> {
    match json_field(obj, field, row)? {
        JsonValue::String(s) if s.trim().is_empty() => Err(DataError::missing(field, Some(row))),
        JsonValue::String(s) => Ok(s.trim().to_string()),
        other => Ok(other.to_string()),
    }
}

fn json_number<T: std::str::FromStr>(
    obj: &Map<String, JsonValue>,
    field: &str,
    row: usize,
) -> Result<T, DataError> {
    match json_field(obj, field, row)? {
        JsonValue::String(s) => parse_number(s.trim(), row, field),
        JsonValue::Number(n) => parse_number(&n.to_string(), row, field),
        other => Err(DataError::InvalidNumber {
            row,
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}
