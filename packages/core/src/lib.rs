//! Core domain types for the nutrition estimator.
//!
//! This crate contains shared types used across all packages:
//! - NutritionEstimate and IngredientEntry for the remote service payload
//! - Lifecycle for the request state of one estimator instance
//! - EstimatorConfig for locating the remote service

mod config;
mod estimate;
mod lifecycle;

pub use config::{BASE_URL_ENV, ConfigError, DEFAULT_BASE_URL, EstimatorConfig};
pub use estimate::{EstimateRequest, IngredientEntry, NutrientRow, NutritionEstimate, Scalar};
pub use lifecycle::{FETCH_FAILED_MESSAGE, Lifecycle, submit_label};
