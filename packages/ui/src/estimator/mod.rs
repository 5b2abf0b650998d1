//! Nutrition estimator components.

mod error_alert;
mod estimate_form;
mod estimate_result;
mod estimator_view;
mod ingredient_list;
mod nutrition_estimator;
mod nutrition_table;
mod submission;

pub use error_alert::ErrorAlert;
pub use estimate_form::EstimateForm;
pub use estimate_result::EstimateResult;
pub use estimator_view::EstimatorView;
pub use ingredient_list::IngredientList;
pub use nutrition_estimator::NutritionEstimator;
pub use nutrition_table::NutritionTable;
pub use submission::{LifecycleStore, submit_dish};
