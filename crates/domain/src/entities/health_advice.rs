//! Health advice derived from an AQI category

use serde::Serialize;

use crate::aqi::CategoryLevel;

/// Activity guidance for one AQI category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthAdvice {
    pub level: CategoryLevel,
    /// One-line summary for the dashboard card
    pub headline: &'static str,
    /// Suggested activities under these conditions
    pub activities: &'static [&'static str],
    /// Groups that should take extra care
    pub sensitive_groups: &'static [&'static str],
}

impl HealthAdvice {
    /// Advice for a category level
    #[must_use]
    pub const fn for_level(level: CategoryLevel) -> Self {
        match level {
            CategoryLevel::Good => Self {
                level,
                headline: "A great day to be outside",
                activities: &["Outdoor exercise", "Open the windows", "Long walks"],
                sensitive_groups: &[],
            },
            CategoryLevel::Moderate => Self {
                level,
                headline: "Air quality is acceptable for most people",
                activities: &["Normal outdoor activity", "Moderate exercise"],
                sensitive_groups: &["Unusually sensitive individuals"],
            },
            CategoryLevel::SensitiveGroups => Self {
                level,
                headline: "Sensitive groups should reduce prolonged exertion",
                activities: &["Shorter outdoor sessions", "Indoor exercise alternatives"],
                sensitive_groups: &["People with asthma", "Children", "Older adults"],
            },
            CategoryLevel::Unhealthy => Self {
                level,
                headline: "Everyone may begin to feel health effects",
                activities: &["Limit outdoor exertion", "Keep windows closed"],
                sensitive_groups: &[
                    "People with heart or lung disease",
                    "Children",
                    "Older adults",
                ],
            },
            CategoryLevel::VeryUnhealthy => Self {
                level,
                headline: "Avoid outdoor activity",
                activities: &["Stay indoors", "Run air purifiers", "Wear a mask if outside"],
                sensitive_groups: &["Everyone, especially respiratory patients"],
            },
            CategoryLevel::Hazardous => Self {
                level,
                headline: "Health alert: remain indoors",
                activities: &["Stay indoors with filtered air", "Avoid all exertion"],
                sensitive_groups: &["Everyone"],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::classify;

    #[test]
    fn every_level_has_advice() {
        for level in [
            CategoryLevel::Good,
            CategoryLevel::Moderate,
            CategoryLevel::SensitiveGroups,
            CategoryLevel::Unhealthy,
            CategoryLevel::VeryUnhealthy,
            CategoryLevel::Hazardous,
        ] {
            let advice = HealthAdvice::for_level(level);
            assert_eq!(advice.level, level);
            assert!(!advice.headline.is_empty());
            assert!(!advice.activities.is_empty());
        }
    }

    #[test]
    fn good_air_has_no_sensitive_groups() {
        assert!(HealthAdvice::for_level(CategoryLevel::Good).sensitive_groups.is_empty());
    }

    #[test]
    fn advice_follows_classification() {
        let category = classify(175);
        let advice = HealthAdvice::for_level(category.level);
        assert_eq!(advice.level, CategoryLevel::Unhealthy);
        assert!(advice.headline.contains("Everyone"));
    }
}
