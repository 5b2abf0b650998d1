#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;
use estimator_core::{FETCH_FAILED_MESSAGE, IngredientEntry, Lifecycle, NutritionEstimate};
use serde_json::json;
use ui::estimator::{EstimatorView, IngredientList};

/// The opening `<button ...>` tag of the rendered markup.
fn button_tag(html: &str) -> &str {
    let start = html.find("<button").expect("no button rendered");
    let end = start + html[start..].find('>').expect("unterminated button tag");
    &html[start..=end]
}

/// Whether a rendered tag carries a truthy `disabled` attribute.
fn is_disabled(tag: &str) -> bool {
    tag.contains(" disabled")
        && !tag.contains("disabled=false")
        && !tag.contains(r#"disabled="false""#)
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn pad_thai() -> NutritionEstimate {
    serde_json::from_value(json!({
        "dish_name": "Pad Thai",
        "estimated_nutrition_per_serving": { "calories": 400 },
        "ingredients_used": [
            { "ingredient": "noodles", "quantity": "1 cup", "weight_grams": 150 }
        ]
    }))
    .unwrap()
}

fn curry() -> NutritionEstimate {
    serde_json::from_value(json!({
        "dish_name": "Green Curry",
        "dish_type": "Main course",
        "estimated_nutrition_per_serving": {
            "calories": 520,
            "protein": "24g",
            "saturated fat": "18g",
            "sodium": "1100mg"
        },
        "ingredients_used": [
            { "ingredient": "chicken", "quantity": "150 g", "weight_grams": 150 },
            { "ingredient": "coconut milk", "quantity": "1/2 cup", "weight_grams": 120 },
            { "ingredient": "rice", "quantity": 1, "weight_grams": 180.0 }
        ]
    }))
    .unwrap()
}

fn view(lifecycle: Lifecycle) -> Element {
    rsx! {
        EstimatorView {
            dish_name: "Pad Thai",
            lifecycle,
            on_input: |_| {},
            on_submit: |_| {},
        }
    }
}

fn idle_app() -> Element {
    view(Lifecycle::Idle)
}

fn loading_app() -> Element {
    view(Lifecycle::Loading)
}

fn pad_thai_app() -> Element {
    view(Lifecycle::Success(pad_thai()))
}

fn curry_app() -> Element {
    view(Lifecycle::Success(curry()))
}

fn failure_app() -> Element {
    view(Lifecycle::Failure(FETCH_FAILED_MESSAGE.to_string()))
}

fn empty_ingredients_app() -> Element {
    rsx! {
        IngredientList { ingredients: Vec::<IngredientEntry>::new() }
    }
}

#[test]
fn test_idle_renders_form_only() {
    let html = render(idle_app);

    assert!(html.contains("Nutrition Estimator"));
    assert!(html.contains("Enter Dish Name"));
    assert!(html.contains(">Estimate</button>"));
    let button = button_tag(&html);
    assert!(!button.contains("btn-loading"));
    assert!(!is_disabled(button), "button disabled while idle: {button}");
    assert!(!html.contains(r#"role="alert""#));
    assert!(!html.contains("nutrition-table"));
}

#[test]
fn test_loading_disables_submit() {
    let html = render(loading_app);

    assert!(html.contains(">Loading...</button>"));
    let button = button_tag(&html);
    assert!(button.contains("btn-loading"));
    assert!(is_disabled(button), "button not disabled: {button}");
    assert!(!html.contains(r#"role="alert""#));
    assert!(!html.contains("nutrition-table"));
}

#[test]
fn test_success_renders_example_rows() {
    let html = render(pad_thai_app);

    assert!(html.contains("Pad Thai"));
    assert!(!html.contains("estimate-dish-type"));
    assert_eq!(html.matches(r#"class="nutrient-row""#).count(), 1);
    assert!(html.contains(">calories</td>"));
    assert!(html.contains(">400</td>"));
    assert_eq!(html.matches(r#"class="ingredient-row""#).count(), 1);
    assert!(html.contains(">noodles</span>"));
    assert!(html.contains(">1 cup (150g)</span>"));
    assert!(!html.contains(r#"role="alert""#));
}

#[test]
fn test_success_row_counts_match_payload() {
    let html = render(curry_app);

    assert!(html.contains(">(Main course)</span>"));
    assert!(html.contains("Estimated Nutrition per Serving:"));
    assert!(html.contains("Ingredients Used:"));
    assert_eq!(html.matches(r#"class="nutrient-row""#).count(), 4);
    assert_eq!(html.matches(r#"class="ingredient-row""#).count(), 3);
    assert!(html.contains(">1 (180g)</span>"));

    // Payload order is kept.
    let calories = html.find(">calories</td>").unwrap();
    let protein = html.find(">protein</td>").unwrap();
    let sodium = html.find(">sodium</td>").unwrap();
    assert!(calories < protein && protein < sodium);
}

#[test]
fn test_failure_renders_alert_only() {
    let html = render(failure_app);

    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("Error! "));
    assert!(html.contains(FETCH_FAILED_MESSAGE));
    assert!(html.contains(">Estimate</button>"));
    assert!(!html.contains("estimate-result"));
    assert!(!html.contains("nutrition-table"));
}

#[test]
fn test_empty_ingredient_list() {
    let html = render(empty_ingredients_app);

    assert!(html.contains("Ingredients Used:"));
    assert_eq!(html.matches(r#"class="ingredient-row""#).count(), 0);
}
