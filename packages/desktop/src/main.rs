// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use api::{EstimatorClient, EstimatorConfig};
use dioxus::prelude::*;

use ui::NutritionEstimator;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match EstimatorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(2);
        }
    };
    tracing::info!(base_url = config.base_url(), "Starting nutrition estimator");

    dioxus::LaunchBuilder::new()
        .with_context(EstimatorClient::new(config))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        NutritionEstimator {}
    }
}
