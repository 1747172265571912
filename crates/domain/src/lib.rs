//! Domain layer for AirWatch
//!
//! Contains the air quality core: EPA breakpoint tables, the per-pollutant
//! interpolator and aggregator, category classification, the synthetic
//! pollutant generator, and the entities the API serves. This layer has no
//! I/O dependencies and defines the ubiquitous language.

pub mod aqi;
pub mod entities;
pub mod errors;
pub mod synthetic;
pub mod value_objects;

pub use aqi::{AqiCategory, AqiResult, CategoryLevel, classify, compute_aqi, sub_index};
pub use entities::*;
pub use errors::DomainError;
pub use synthetic::{
    FixedClock, HourClock, SystemClock, is_known_polluted, should_override, synthesize,
};
pub use value_objects::*;
