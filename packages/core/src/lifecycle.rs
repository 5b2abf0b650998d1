//! Request lifecycle of a single estimator instance.

use crate::NutritionEstimate;

/// Message shown to the user for any failed request.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// Label for the submit button given whether a request is in flight.
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "Loading..."
    } else {
        "Estimate"
    }
}

/// Where the estimator is in its submit/response cycle.
///
/// A result and an error can never be held at the same time, and starting a
/// new request drops whichever one was there.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Lifecycle {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request returned an estimate.
    Success(NutritionEstimate),
    /// The last request failed; holds the user-facing message.
    Failure(String),
}

impl Lifecycle {
    /// Enter `Loading`, clearing any previous result or error.
    pub fn begin(&mut self) {
        *self = Lifecycle::Loading;
    }

    /// Store a successful response. Ignored unless a request is in flight.
    pub fn succeed(&mut self, estimate: NutritionEstimate) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = Lifecycle::Success(estimate);
        true
    }

    /// Store a failure message. Ignored unless a request is in flight.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = Lifecycle::Failure(message.into());
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Lifecycle::Loading)
    }

    /// The current estimate, if the last request succeeded.
    pub fn estimate(&self) -> Option<&NutritionEstimate> {
        match self {
            Lifecycle::Success(estimate) => Some(estimate),
            _ => None,
        }
    }

    /// The current error message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Lifecycle::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        submit_label(self.is_loading())
    }

    /// Get a simple state string for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Idle => "idle",
            Lifecycle::Loading => "loading",
            Lifecycle::Success(_) => "success",
            Lifecycle::Failure(_) => "failure",
        }
    }
}
