//! Writes `avocado_sample.csv`: synthetic weekly sales in the layout of the
//! published avocado dataset, including the `TotalUS` aggregate row.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};

const OUTPUT_PATH: &str = "avocado_sample.csv";

/// (region, base price, base weekly volume)
const REGIONS: &[(&str, f64, f64)] = &[
    ("Albany", 1.45, 95_000.0),
    ("Atlanta", 1.30, 520_000.0),
    ("Boise", 1.25, 80_000.0),
    ("Chicago", 1.50, 720_000.0),
    ("Houston", 1.05, 1_050_000.0),
    ("Seattle", 1.55, 480_000.0),
];

/// (product type, price factor, volume factor)
const TYPES: &[(&str, f64, f64)] = &[("conventional", 1.0, 1.0), ("organic", 1.45, 0.035)];

/// Small deterministic generator (splitmix64), enough for plausible noise.
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [-1, 1).
    fn jitter(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

fn main() -> Result<()> {
    let mut rng = SplitMix(2015);

    // Sundays, first week of 2015 through the end of March 2018.
    let first = NaiveDate::from_ymd_opt(2015, 1, 4).context("start date")?;
    let last = NaiveDate::from_ymd_opt(2018, 3, 25).context("end date")?;
    let dates: Vec<NaiveDate> = std::iter::successors(Some(first), |d| Some(*d + Duration::weeks(1)))
        .take_while(|d| *d <= last)
        .collect();

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writer.write_record(["", "Date", "AveragePrice", "Total Volume", "type", "year", "region"])?;

    let mut rows = 0usize;
    for (week_idx, date) in dates.iter().enumerate() {
        // Prices peak in late summer, volume in late winter.
        let season = (f64::from(date.ordinal()) / 365.25 * std::f64::consts::TAU).sin();

        for &(product_type, price_factor, volume_factor) in TYPES {
            let mut us_volume = 0.0;
            let mut us_spend = 0.0;

            for &(region, base_price, base_volume) in REGIONS {
                let price = base_price * price_factor * (1.0 - 0.12 * season) + 0.05 * rng.jitter();
                let volume = base_volume * volume_factor * (1.0 + 0.15 * season + 0.1 * rng.jitter());
                us_volume += volume;
                us_spend += price * volume;

                write_row(&mut writer, week_idx, date, price, volume, product_type, region)?;
                rows += 1;
            }

            let us_price = us_spend / us_volume;
            write_row(&mut writer, week_idx, date, us_price, us_volume, product_type, "TotalUS")?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!(
        "Wrote {rows} rows ({} weeks, {} regions + TotalUS) to {OUTPUT_PATH}",
        dates.len(),
        REGIONS.len()
    );
    Ok(())
}

fn write_row<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    index: usize,
    date: &NaiveDate,
    price: f64,
    volume: f64,
    product_type: &str,
    region: &str,
) -> Result<()> {
    writer.write_record([
        index.to_string(),
        date.format("%Y-%m-%d").to_string(),
        format!("{price:.2}"),
        format!("{volume:.2}"),
        product_type.to_string(),
        date.year().to_string(),
        region.to_string(),
    ])?;
    Ok(())
}
