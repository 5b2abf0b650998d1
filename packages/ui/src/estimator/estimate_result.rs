//! Estimate result component.

use dioxus::prelude::*;
use estimator_core::NutritionEstimate;

use super::{IngredientList, NutritionTable};

/// Heading, nutrition table and ingredient list for one estimate.
#[component]
pub fn EstimateResult(estimate: NutritionEstimate) -> Element {
    let dish_type = estimate.dish_type_label().map(str::to_string);

    rsx! {
        div { class: "estimate-result",
            h2 { class: "estimate-heading",
                "{estimate.dish_name}"
                if let Some(dish_type) = dish_type {
                    span { class: "estimate-dish-type", "({dish_type})" }
                }
            }

            NutritionTable { rows: estimate.nutrient_rows() }
            IngredientList { ingredients: estimate.ingredients_used.clone() }
        }
    }
}
