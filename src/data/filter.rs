use super::model::{PreparedDataset, Record};

// ---------------------------------------------------------------------------
// Selection filter: product type, then year
// ---------------------------------------------------------------------------

/// Records matching `product_type` and `year` exactly, in prepared order.
///
/// A year or type the dataset has never seen simply matches nothing.
pub fn filter_selection<'a>(
    dataset: &'a PreparedDataset,
    year: i32,
    product_type: &'a str,
) -> impl Iterator<Item = &'a Record> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |rec| rec.product_type == product_type)
        .filter(move |rec| rec.year == year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RawRecord;
    use crate::data::prepare::prepare;

    fn raw(date: &str, year: i32, region: &str, product_type: &str) -> RawRecord {
        RawRecord {
            date: date.into(),
            year,
            region: region.into(),
            product_type: product_type.into(),
            average_price: 1.0,
            total_volume: 1.0,
        }
    }

    #[test]
    fn matches_type_and_year_exactly() {
        let (ds, _) = prepare(vec![
            raw("2015-01-04", 2015, "Albany", "conventional"),
            raw("2015-01-04", 2015, "Albany", "organic"),
            raw("2016-01-10", 2016, "Albany", "conventional"),
            raw("2015-01-11", 2015, "Boise", "Conventional"),
        ])
        .unwrap();

        let hits: Vec<&Record> = filter_selection(&ds, 2015, "conventional").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].region, "Albany");
        assert_eq!(hits[0].year, 2015);
    }

    #[test]
    fn unknown_selection_matches_nothing() {
        let (ds, _) = prepare(vec![raw("2015-01-04", 2015, "Albany", "conventional")]).unwrap();
        assert_eq!(filter_selection(&ds, 1999, "conventional").count(), 0);
        assert_eq!(filter_selection(&ds, 2015, "heirloom").count(), 0);
    }
}
