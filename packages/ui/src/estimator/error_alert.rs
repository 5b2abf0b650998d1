//! Error alert component.

use dioxus::prelude::*;

/// Alert block shown when the last request failed.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        div {
            class: "error-alert",
            role: "alert",
            strong { class: "error-alert-title", "Error! " }
            span { class: "error-alert-message", "{message}" }
        }
    }
}
