use std::collections::BTreeSet;

use avocadash::chart::{resolve, ChartError, Metric, SeriesPoint};
use avocadash::data::loader::{load_csv, load_json};
use avocadash::data::prepare::{EXCLUDED_REGION, PARTIAL_WEEK};
use avocadash::data::{prepare, DataError, RawRecord};
use proptest::prelude::*;

const AVOCADO_CSV: &str = "\
,Date,AveragePrice,Total Volume,4046,4225,4770,Total Bags,type,year,region
0,2015-01-04,1.22,40000.00,1000,2000,30,5000,conventional,2015,Albany
0,2015-01-04,1.10,9000000.00,1000,2000,30,5000,conventional,2015,TotalUS
";

fn raw(date: &str, region: &str, product_type: &str, price: f64, volume: f64) -> RawRecord {
    RawRecord {
        date: date.into(),
        year: date[..4].parse().unwrap(),
        region: region.into(),
        product_type: product_type.into(),
        average_price: price,
        total_volume: volume,
    }
}

#[test]
fn csv_to_chart_albany_example() {
    let (ds, opts) = prepare(load_csv(AVOCADO_CSV.as_bytes()).unwrap()).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.records()[0].region, "Albany");
    assert_eq!(opts.default_year(), Some(2015));

    let chart = resolve(&ds, 2015, "conventional", "price").unwrap();
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].region, "Albany");
    assert_eq!(chart.series[0].points, vec![SeriesPoint { week: 1, value: 1.22 }]);
}

#[test]
fn week_53_row_is_dropped_whatever_its_fields() {
    let (ds, opts) = prepare(vec![raw("2015-12-28", "Albany", "organic", 9.99, 1.0)]).unwrap();
    assert!(ds.is_empty());
    assert!(opts.years.is_empty());
    assert!(opts.product_types.is_empty());
}

#[test]
fn revenue_is_not_a_metric() {
    let (ds, _) = prepare(load_csv(AVOCADO_CSV.as_bytes()).unwrap()).unwrap();
    let err = resolve(&ds, 2015, "conventional", "revenue").unwrap_err();
    assert!(matches!(err, ChartError::InvalidMetric { ref metric } if metric == "revenue"));

    // The failed request leaves the dataset usable.
    assert_eq!(resolve(&ds, 2015, "conventional", "volume").unwrap().series.len(), 1);
}

#[test]
fn json_and_csv_inputs_prepare_identically() {
    let json = r#"[
        {"Date": "2015-01-04", "AveragePrice": 1.22, "Total Volume": 40000.0,
         "type": "conventional", "year": 2015, "region": "Albany"},
        {"Date": "2015-01-04", "AveragePrice": 1.10, "Total Volume": 9000000.0,
         "type": "conventional", "year": 2015, "region": "TotalUS"}
    ]"#;
    let from_json = prepare(load_json(json).unwrap()).unwrap();
    let from_csv = prepare(load_csv(AVOCADO_CSV.as_bytes()).unwrap()).unwrap();
    assert_eq!(from_json, from_csv);
}

#[test]
fn malformed_date_fails_preparation() {
    let input = "Date,AveragePrice,Total Volume,type,year,region\n\
                 2015/01/04,1.0,1.0,organic,2015,Albany\n";
    let err = prepare(load_csv(input.as_bytes()).unwrap()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "row 0: date '2015/01/04' is not in YYYY-MM-DD form"
    );
    assert!(matches!(err, DataError::MalformedDate { row: 0, .. }));
}

// ---------------------------------------------------------------------------
// Properties over generated rows
// ---------------------------------------------------------------------------

const REGIONS: &[&str] = &["Albany", "Boise", "Chicago", "TotalUS"];
const TYPES: &[&str] = &["conventional", "organic"];

fn raw_record() -> impl Strategy<Value = RawRecord> {
    (
        2015i32..=2018,
        1u32..=12,
        1u32..=28,
        0..REGIONS.len(),
        0..TYPES.len(),
        0.5f64..3.0,
        1.0f64..1.0e6,
    )
        .prop_map(|(year, month, day, region, ty, price, volume)| RawRecord {
            date: format!("{year:04}-{month:02}-{day:02}"),
            year,
            region: REGIONS[region].to_string(),
            product_type: TYPES[ty].to_string(),
            average_price: price,
            total_volume: volume,
        })
}

proptest! {
    #[test]
    fn prepared_rows_never_break_exclusions(rows in prop::collection::vec(raw_record(), 0..60)) {
        let (ds, _) = prepare(rows).unwrap();
        for rec in ds.records() {
            prop_assert!(rec.week >= 1 && rec.week < PARTIAL_WEEK);
            prop_assert_ne!(rec.region.as_str(), EXCLUDED_REGION);
        }
        prop_assert!(ds.records().windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn prepare_is_idempotent(rows in prop::collection::vec(raw_record(), 0..60)) {
        let first = prepare(rows.clone()).unwrap();
        let second = prepare(rows).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_series_per_region_with_matching_values(
        rows in prop::collection::vec(raw_record(), 0..60),
        year in 2015i32..=2019,
        ty in 0..TYPES.len(),
    ) {
        let (ds, _) = prepare(rows).unwrap();
        let product_type = TYPES[ty];
        let matching: Vec<_> = ds
            .records()
            .iter()
            .filter(|r| r.year == year && r.product_type == product_type)
            .collect();
        let regions: BTreeSet<&str> = matching.iter().map(|r| r.region.as_str()).collect();

        for metric in Metric::ALL {
            let chart = resolve(&ds, year, product_type, metric.as_str()).unwrap();
            prop_assert_eq!(chart.series.len(), regions.len());

            for series in &chart.series {
                let expected: Vec<SeriesPoint> = matching
                    .iter()
                    .filter(|r| r.region == series.region)
                    .map(|r| SeriesPoint {
                        week: r.week,
                        value: match metric {
                            Metric::Price => r.average_price,
                            Metric::Volume => r.total_volume,
                        },
                    })
                    .collect();
                prop_assert_eq!(&series.points, &expected);
            }
        }
    }
}
