//! Estimate request over HTTP.

use estimator_core::{EstimateRequest, EstimatorConfig, FETCH_FAILED_MESSAGE, NutritionEstimate};

use crate::EstimateError;

/// Client for the estimation service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct EstimatorClient {
    http: reqwest::Client,
    config: EstimatorConfig,
}

impl Default for EstimatorClient {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

impl EstimatorClient {
    /// Create a client for the service described by `config`.
    pub fn new(config: EstimatorConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http_client(config: EstimatorConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Ask the service to estimate nutrition for `dish_name`.
    ///
    /// Sends exactly one request. No retries and no timeout.
    pub async fn estimate(&self, dish_name: &str) -> Result<NutritionEstimate, EstimateError> {
        let url = self.config.endpoint();
        tracing::info!(dish_name, %url, "Requesting nutrition estimate");

        let response = self
            .http
            .post(&url)
            .json(&EstimateRequest::new(dish_name))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EstimateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let estimate: NutritionEstimate = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            dish = %estimate.dish_name,
            nutrients = estimate.estimated_nutrition_per_serving.len(),
            ingredients = estimate.ingredients_used.len(),
            "Received nutrition estimate"
        );
        Ok(estimate)
    }

    /// Like [`estimate`](Self::estimate), but logs the failure and reduces it
    /// to the message shown to the user.
    pub async fn estimate_or_message(
        &self,
        dish_name: &str,
    ) -> Result<NutritionEstimate, &'static str> {
        self.estimate(dish_name).await.map_err(|e| {
            tracing::error!(error = %e, dish_name, "Error fetching data");
            FETCH_FAILED_MESSAGE
        })
    }
}
