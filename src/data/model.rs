use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawRecord – one row as it comes out of the loader
// ---------------------------------------------------------------------------

/// A single input row, typed but not yet prepared (date still text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub year: i32,
    pub region: String,
    pub product_type: String,
    pub average_price: f64,
    pub total_volume: f64,
}

// ---------------------------------------------------------------------------
// Record – one row of the prepared dataset
// ---------------------------------------------------------------------------

/// A prepared row. `week` is the ISO week of `date`, always in 1..=52.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub date: NaiveDate,
    pub year: i32,
    pub week: u32,
    pub region: String,
    pub product_type: String,
    pub average_price: f64,
    pub total_volume: f64,
}

// ---------------------------------------------------------------------------
// PreparedDataset – the read-only table every chart is drawn from
// ---------------------------------------------------------------------------

/// Records sorted by date with week 53 and the `TotalUS` aggregate removed.
///
/// Only [`prepare`](super::prepare::prepare) builds one, so the exclusion
/// invariants hold for every value of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDataset {
    records: Vec<Record>,
}

impl PreparedDataset {
    pub(crate) fn from_sorted(records: Vec<Record>) -> Self {
        PreparedDataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Selector options – what the UI offers for each picker
// ---------------------------------------------------------------------------

/// A (display label, underlying value) pair for a picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorOption<T> {
    pub label: String,
    pub value: T,
}

impl<T: ToString> SelectorOption<T> {
    pub fn from_value(value: T) -> Self {
        SelectorOption {
            label: value.to_string(),
            value,
        }
    }
}

/// Product type picked when nothing else has been chosen.
pub const DEFAULT_PRODUCT_TYPE: &str = "conventional";

/// Distinct years and product types of a prepared dataset, first-seen order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SelectorOptions {
    pub years: Vec<SelectorOption<i32>>,
    pub product_types: Vec<SelectorOption<String>>,
}

impl SelectorOptions {
    /// Collect options from a prepared dataset.
    pub fn from_dataset(dataset: &PreparedDataset) -> Self {
        let mut options = SelectorOptions::default();
        for rec in dataset.records() {
            if !options.years.iter().any(|o| o.value == rec.year) {
                options.years.push(SelectorOption::from_value(rec.year));
            }
            if !options
                .product_types
                .iter()
                .any(|o| o.value == rec.product_type)
            {
                options
                    .product_types
                    .push(SelectorOption::from_value(rec.product_type.clone()));
            }
        }
        options
    }

    /// Earliest year present, if any.
    pub fn default_year(&self) -> Option<i32> {
        self.years.iter().map(|o| o.value).min()
    }

    /// `"conventional"` when present, otherwise the first type seen.
    pub fn default_product_type(&self) -> Option<&str> {
        self.product_types
            .iter()
            .find(|o| o.value == DEFAULT_PRODUCT_TYPE)
            .or_else(|| self.product_types.first())
            .map(|o| o.value.as_str())
    }
}
