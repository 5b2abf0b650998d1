//! Client for the remote nutrition estimation service.
//!
//! This crate wraps the single `POST /estimate` call the estimator makes.
//! The service base URL comes from [`EstimatorConfig`], so tests can point
//! the client at a local mock server.

mod client;
mod error;

pub use client::EstimatorClient;
pub use error::EstimateError;

// Re-export core types for convenience
pub use estimator_core::{
    EstimateRequest, EstimatorConfig, FETCH_FAILED_MESSAGE, IngredientEntry, Lifecycle,
    NutrientRow, NutritionEstimate,
};
