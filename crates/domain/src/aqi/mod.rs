//! EPA Air Quality Index computation
//!
//! Piecewise-linear interpolation over the EPA breakpoint tables, the
//! worst-pollutant aggregation rule, and category classification.

mod breakpoints;
mod category;
mod index;

pub use breakpoints::{AQI_CEILING, Breakpoint, table};
pub use category::{AqiCategory, CATEGORIES, CategoryLevel, classify, classify_level};
pub use index::{AqiResult, SubIndices, compute_aqi, sub_index};
