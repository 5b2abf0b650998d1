//! Nutrition table component.

use dioxus::prelude::*;
use estimator_core::NutrientRow;

/// Table with one row per nutrient, in the order given.
#[component]
pub fn NutritionTable(rows: Vec<NutrientRow>) -> Element {
    rsx! {
        div { class: "nutrition-section",
            h3 { class: "section-title", "Estimated Nutrition per Serving:" }
            div { class: "table-wrapper",
                table { class: "nutrition-table",
                    thead {
                        tr {
                            th { "Nutrient" }
                            th { "Value" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                key: "{row.key}",
                                class: "nutrient-row",
                                td { class: "nutrient-name", "{row.key}" }
                                td { class: "nutrient-value", "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
