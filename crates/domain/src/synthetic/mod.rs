//! Synthetic pollutant data
//!
//! A presentation-quality fallback, not a scientific model: when the live
//! provider returns nothing, or returns implausibly clean readings for a
//! location known to be polluted, the generator supplies plausible
//! concentrations instead. Deterministic within an hour bucket.

mod generator;
mod profiles;

pub use generator::{FixedClock, HourClock, SystemClock, should_override, synthesize};
pub use profiles::{CITY_PROFILES, CityProfile, find_profile, is_known_polluted};
