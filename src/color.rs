use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use avocadash::PreparedDataset;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Region → Color32
// ---------------------------------------------------------------------------

/// One colour per region of the whole dataset, so a region keeps its colour
/// when the year or product type changes.
#[derive(Debug, Clone, Default)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
}

impl RegionColors {
    pub fn new(dataset: &PreparedDataset) -> Self {
        let regions: BTreeSet<&str> = dataset
            .records()
            .iter()
            .map(|r| r.region.as_str())
            .collect();
        let palette = generate_palette(regions.len());
        let mapping = regions
            .into_iter()
            .zip(palette)
            .map(|(region, c)| (region.to_string(), c))
            .collect();
        RegionColors { mapping }
    }

    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping.get(region).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avocadash::data::RawRecord;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn every_region_gets_its_own_colour() {
        let raw = |region: &str, product_type: &str| RawRecord {
            date: "2015-01-04".into(),
            year: 2015,
            region: region.into(),
            product_type: product_type.into(),
            average_price: 1.0,
            total_volume: 1.0,
        };
        let (ds, _) = avocadash::prepare(vec![
            raw("Albany", "conventional"),
            raw("Boise", "organic"),
            raw("Albany", "organic"),
        ])
        .unwrap();
        let colors = RegionColors::new(&ds);
        assert_ne!(colors.color_for("Albany"), colors.color_for("Boise"));
        assert_eq!(colors.color_for("Nowhere"), Color32::GRAY);
    }
}
