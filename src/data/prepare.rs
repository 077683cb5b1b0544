use chrono::{Datelike, NaiveDate};

use super::error::DataError;
use super::model::{PreparedDataset, RawRecord, Record, SelectorOptions};

/// Aggregate pseudo-region; it is the sum of all the others.
pub const EXCLUDED_REGION: &str = "TotalUS";

/// ISO week that only some years have. Dropped so week-over-week lines line up.
pub const PARTIAL_WEEK: u32 = 53;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turn loaded rows into the dataset every chart is drawn from.
///
/// Steps, in order:
/// 1. parse `YYYY-MM-DD` dates
/// 2. stable sort by date
/// 3. derive the ISO week
/// 4. drop week 53
/// 5. drop the `TotalUS` aggregate
///
/// Selector options are collected from what survives.
pub fn prepare(raw: Vec<RawRecord>) -> Result<(PreparedDataset, SelectorOptions), DataError> {
    let total = raw.len();

    let mut dated: Vec<(NaiveDate, RawRecord)> = raw
        .into_iter()
        .enumerate()
        .map(|(row, rec)| Ok((parse_date(&rec.date, row)?, rec)))
        .collect::<Result<_, DataError>>()?;

    dated.sort_by_key(|(date, _)| *date);

    let mut partial_week = 0usize;
    let mut aggregate = 0usize;
    let records: Vec<Record> = dated
        .into_iter()
        .filter_map(|(date, rec)| {
            let week = date.iso_week().week();
            if week == PARTIAL_WEEK {
                partial_week += 1;
                return None;
            }
            if rec.region == EXCLUDED_REGION {
                aggregate += 1;
                return None;
            }
            Some(Record {
                date,
                year: rec.year,
                week,
                region: rec.region,
                product_type: rec.product_type,
                average_price: rec.average_price,
                total_volume: rec.total_volume,
            })
        })
        .collect();

    log::debug!(
        "Prepared {} of {total} rows ({partial_week} in week {PARTIAL_WEEK}, {aggregate} {EXCLUDED_REGION} dropped)",
        records.len()
    );

    let dataset = PreparedDataset::from_sorted(records);
    let options = SelectorOptions::from_dataset(&dataset);
    Ok((dataset, options))
}

/// Strict: surrounding whitespace is not accepted here.
fn parse_date(s: &str, row: usize) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DataError::MalformedDate {
        row,
        value: s.to_string(),
    })
}
