//! Dish name form component.

use dioxus::prelude::*;

/// Props for EstimateForm component.
#[derive(Props, Clone, PartialEq)]
pub struct EstimateFormProps {
    /// Current dish name.
    pub dish_name: String,
    /// Whether a request is in flight.
    #[props(default = false)]
    pub loading: bool,
    /// Callback on every keystroke with the new value.
    pub on_input: EventHandler<String>,
    /// Callback when the form is submitted.
    pub on_submit: EventHandler<()>,
}

/// Form with the dish name input and the submit button.
///
/// The input is `required`, so browsers refuse to submit it empty.
#[component]
pub fn EstimateForm(props: EstimateFormProps) -> Element {
    let label = estimator_core::submit_label(props.loading);
    let button_class = if props.loading {
        "btn btn-primary btn-loading"
    } else {
        "btn btn-primary"
    };

    rsx! {
        form {
            class: "estimate-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                props.on_submit.call(());
            },

            input {
                r#type: "text",
                class: "estimate-input",
                placeholder: "Enter Dish Name",
                required: true,
                value: "{props.dish_name}",
                oninput: move |event: FormEvent| props.on_input.call(event.value()),
            }
            button {
                r#type: "submit",
                class: "{button_class}",
                disabled: props.loading,
                {label}
            }
        }
    }
}
