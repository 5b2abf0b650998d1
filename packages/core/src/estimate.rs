//! Payload types exchanged with the remote estimation service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a `POST /estimate` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    /// Free-form dish name as typed by the user.
    pub dish_name: String,
}

impl EstimateRequest {
    pub fn new(dish_name: impl Into<String>) -> Self {
        Self {
            dish_name: dish_name.into(),
        }
    }
}

/// A loosely typed value from the service (usually a string or a number).
///
/// Displays the way JSX prints it as text: strings verbatim, whole numbers
/// without a trailing `.0`, nothing for `null` or booleans, and array items
/// concatenated without a separator. Objects, which JSX cannot render, fall
/// back to compact JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scalar(pub Value);

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_text(f, &self.0)
    }
}

fn write_text(f: &mut std::fmt::Formatter<'_>, value: &Value) -> std::fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        Value::Number(n) => match n.as_f64() {
            // Whole floats print as integers below 1e21, like JS
            Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e21 => write!(f, "{x:.0}"),
            _ => write!(f, "{n}"),
        },
        Value::Null | Value::Bool(_) => Ok(()),
        Value::Array(items) => items.iter().try_for_each(|item| write_text(f, item)),
        Value::Object(_) => write!(f, "{value}"),
    }
}

/// One ingredient the service based its estimate on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientEntry {
    /// Ingredient name.
    pub ingredient: String,
    /// Household quantity, e.g. `"1 cup"` or `2`.
    pub quantity: Scalar,
    /// Weight of the quantity in grams.
    pub weight_grams: Scalar,
}

impl IngredientEntry {
    /// Quantity and weight as shown in the ingredient list, e.g. `1 cup (150g)`.
    pub fn amount_label(&self) -> String {
        format!("{} ({}g)", self.quantity, self.weight_grams)
    }
}

/// A single row of the nutrition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientRow {
    /// Nutrient key exactly as the service sent it.
    pub key: String,
    /// Display value.
    pub value: String,
}

/// Successful response of the estimation service.
///
/// Nothing is validated: every field falls back to its empty value when the
/// service leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionEstimate {
    pub dish_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_type: Option<String>,
    /// Nutrient name to value, in the order the service returned them.
    pub estimated_nutrition_per_serving: Map<String, Value>,
    pub ingredients_used: Vec<IngredientEntry>,
}

impl NutritionEstimate {
    /// Dish type for the heading, if the service sent a non-empty one.
    pub fn dish_type_label(&self) -> Option<&str> {
        self.dish_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Nutrition table rows in payload order.
    pub fn nutrient_rows(&self) -> Vec<NutrientRow> {
        self.estimated_nutrition_per_serving
            .iter()
            .map(|(key, value)| NutrientRow {
                key: key.clone(),
                value: Scalar(value.clone()).to_string(),
            })
            .collect()
    }
}
