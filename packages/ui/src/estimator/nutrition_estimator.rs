//! Stateful nutrition estimator.

use api::EstimatorClient;
use dioxus::prelude::*;
use estimator_core::Lifecycle;

use super::{EstimatorView, submit_dish};

const ESTIMATOR_CSS: Asset = asset!("/assets/styling/estimator.css");

/// Nutrition estimator: collects a dish name, asks the estimation service
/// and shows the result.
///
/// Uses the `EstimatorClient` from context when one is provided, otherwise a
/// client for the default service.
#[component]
pub fn NutritionEstimator() -> Element {
    let client = use_hook(|| try_consume_context::<EstimatorClient>().unwrap_or_default());
    let mut dish_name = use_signal(String::new);
    let lifecycle = use_signal(Lifecycle::default);

    let submit = move |_| {
        // Desktop renderers don't enforce `required`
        if let Some(request) = submit_dish(&client, dish_name(), lifecycle) {
            spawn(request);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ESTIMATOR_CSS }
        EstimatorView {
            dish_name: dish_name(),
            lifecycle: lifecycle(),
            on_input: move |value: String| dish_name.set(value),
            on_submit: submit,
        }
    }
}
