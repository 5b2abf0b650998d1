//! Estimator card layout.

use dioxus::prelude::*;
use estimator_core::Lifecycle;

use super::{ErrorAlert, EstimateForm, EstimateResult};

/// Props for EstimatorView component.
#[derive(Props, Clone, PartialEq)]
pub struct EstimatorViewProps {
    /// Current dish name.
    pub dish_name: String,
    /// Request lifecycle to render.
    pub lifecycle: Lifecycle,
    /// Callback on every keystroke with the new value.
    pub on_input: EventHandler<String>,
    /// Callback when the form is submitted.
    pub on_submit: EventHandler<()>,
}

/// Stateless rendering of the estimator: form, then either the error alert
/// or the result, never both.
#[component]
pub fn EstimatorView(props: EstimatorViewProps) -> Element {
    rsx! {
        div { class: "estimator-page",
            div { class: "estimator-card",
                h1 { class: "estimator-title", "🍽️ Nutrition Estimator" }

                EstimateForm {
                    dish_name: props.dish_name.clone(),
                    loading: props.lifecycle.is_loading(),
                    on_input: props.on_input,
                    on_submit: props.on_submit,
                }

                if let Some(message) = props.lifecycle.error() {
                    ErrorAlert { message: message.to_string() }
                }

                if let Some(estimate) = props.lifecycle.estimate() {
                    EstimateResult { estimate: estimate.clone() }
                }
            }
        }
    }
}
