// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use api::{EstimatorClient, EstimatorConfig};
use dioxus::prelude::*;

use ui::NutritionEstimator;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| EstimatorClient::new(estimator_config()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Estimator page.
#[component]
fn Home() -> Element {
    rsx! {
        NutritionEstimator {}
    }
}

/// The browser has no process environment, so the base URL is taken from
/// `NUTRITION_API_URL` at build time.
fn estimator_config() -> EstimatorConfig {
    EstimatorConfig::resolve(option_env!("NUTRITION_API_URL")).unwrap_or_else(|e| {
        tracing::warn!("{e}; using the default estimation service");
        EstimatorConfig::default()
    })
}
