//! AQI category bands
//!
//! The six EPA bands with their display colors and descriptions. Bands are
//! contiguous and exhaustive over the whole scale; values above 500 fall
//! into the Hazardous band.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Aqi;

/// Category level identifiers, from best to worst air quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLevel {
    Good,
    Moderate,
    SensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl fmt::Display for CategoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", classify_level(*self).label)
    }
}

/// A category band: inclusive AQI range plus display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiCategory {
    pub level: CategoryLevel,
    /// Inclusive lower bound
    pub min: u16,
    /// Inclusive upper bound
    pub max: u16,
    pub label: &'static str,
    /// EPA display color
    pub color: &'static str,
    pub description: &'static str,
}

/// The six EPA category bands in ascending order
pub static CATEGORIES: [AqiCategory; 6] = [
    AqiCategory {
        level: CategoryLevel::Good,
        min: 0,
        max: 50,
        label: "Good",
        color: "#00E400",
        description: "Air quality is satisfactory",
    },
    AqiCategory {
        level: CategoryLevel::Moderate,
        min: 51,
        max: 100,
        label: "Moderate",
        color: "#FFFF00",
        description: "Air quality is acceptable",
    },
    AqiCategory {
        level: CategoryLevel::SensitiveGroups,
        min: 101,
        max: 150,
        label: "Unhealthy for Sensitive Groups",
        color: "#FF7E00",
        description: "Members of sensitive groups may experience health effects",
    },
    AqiCategory {
        level: CategoryLevel::Unhealthy,
        min: 151,
        max: 200,
        label: "Unhealthy",
        color: "#FF0000",
        description: "Everyone may begin to experience health effects",
    },
    AqiCategory {
        level: CategoryLevel::VeryUnhealthy,
        min: 201,
        max: 300,
        label: "Very Unhealthy",
        color: "#8F3F97",
        description: "Health warnings of emergency conditions",
    },
    AqiCategory {
        level: CategoryLevel::Hazardous,
        min: 301,
        max: 500,
        label: "Hazardous",
        color: "#7E0023",
        description: "Health alert: everyone may experience serious health effects",
    },
];

/// Classify an AQI value into its category band
///
/// Linear scan over six entries; values above 500 map to the last band.
#[must_use]
pub fn classify(aqi: u16) -> &'static AqiCategory {
    for category in &CATEGORIES {
        if aqi <= category.max {
            return category;
        }
    }
    &CATEGORIES[CATEGORIES.len() - 1]
}

/// Look up the band record for a category level
#[must_use]
pub fn classify_level(level: CategoryLevel) -> &'static AqiCategory {
    // Levels and bands are both in ascending order
    &CATEGORIES[level as usize]
}

impl Aqi {
    /// The category band this AQI value falls into
    #[must_use]
    pub fn category(self) -> &'static AqiCategory {
        classify(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(0).label, "Good");
        assert_eq!(classify(50).label, "Good");
        assert_eq!(classify(51).label, "Moderate");
        assert_eq!(classify(100).label, "Moderate");
        assert_eq!(classify(101).label, "Unhealthy for Sensitive Groups");
        assert_eq!(classify(150).label, "Unhealthy for Sensitive Groups");
        assert_eq!(classify(151).label, "Unhealthy");
        assert_eq!(classify(200).label, "Unhealthy");
        assert_eq!(classify(201).label, "Very Unhealthy");
        assert_eq!(classify(300).label, "Very Unhealthy");
        assert_eq!(classify(301).label, "Hazardous");
        assert_eq!(classify(500).label, "Hazardous");
    }

    #[test]
    fn ceiling_band_absorbs_overflow() {
        assert_eq!(classify(501).level, CategoryLevel::Hazardous);
        assert_eq!(classify(1000).level, CategoryLevel::Hazardous);
        assert_eq!(classify(u16::MAX).level, CategoryLevel::Hazardous);
    }

    #[test]
    fn bands_are_contiguous_and_exhaustive() {
        assert_eq!(CATEGORIES[0].min, 0);
        for pair in CATEGORIES.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
        assert_eq!(CATEGORIES[CATEGORIES.len() - 1].max, 500);
    }

    #[test]
    fn classify_level_matches_band_order() {
        assert_eq!(classify_level(CategoryLevel::Good).min, 0);
        assert_eq!(classify_level(CategoryLevel::Hazardous).max, 500);
        assert_eq!(
            classify_level(CategoryLevel::SensitiveGroups).label,
            "Unhealthy for Sensitive Groups"
        );
    }

    #[test]
    fn aqi_category_accessor() {
        assert_eq!(Aqi::clamped(42).category().level, CategoryLevel::Good);
        assert_eq!(Aqi::clamped(500).category().level, CategoryLevel::Hazardous);
    }

    #[test]
    fn level_display_uses_label() {
        assert_eq!(CategoryLevel::VeryUnhealthy.to_string(), "Very Unhealthy");
    }

    #[test]
    fn colors_are_epa_hex_values() {
        assert_eq!(classify(25).color, "#00E400");
        assert_eq!(classify(175).color, "#FF0000");
        assert_eq!(classify(400).color, "#7E0023");
    }
}
