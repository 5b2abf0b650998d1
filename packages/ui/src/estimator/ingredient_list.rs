//! Ingredient list component.

use dioxus::prelude::*;
use estimator_core::IngredientEntry;

/// List with one row per ingredient: name, quantity and gram weight.
#[component]
pub fn IngredientList(ingredients: Vec<IngredientEntry>) -> Element {
    rsx! {
        div { class: "ingredients-section",
            h3 { class: "section-title", "Ingredients Used:" }
            ul { class: "ingredient-list",
                for (index, item) in ingredients.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: "ingredient-row",
                        span { class: "ingredient-name", "{item.ingredient}" }
                        span { class: "ingredient-amount", {item.amount_label()} }
                    }
                }
            }
        }
    }
}
