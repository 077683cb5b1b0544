//! Data layer: core types, loading, preparation, and filtering.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Vec<RawRecord>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  prepare  │  dates, sort, ISO week, drop week 53 / TotalUS
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────────┐
//!   │ PreparedDataset  │  + SelectorOptions (years, product types)
//!   └─────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  product type + year → matching records
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod prepare;

pub use error::DataError;
pub use loader::load_file;
pub use model::{PreparedDataset, RawRecord, Record, SelectorOption, SelectorOptions};
pub use prepare::prepare;
