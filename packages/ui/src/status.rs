use dioxus::prelude::*;

/// Centered placeholder shown while a fetch is in flight.
#[component]
pub fn LoadingIndicator(
    #[props(default = "Loading...".to_string())] message: String,
) -> Element {
    rsx! {
        div {
            class: "status-panel",
            h2 { "{message}" }
        }
    }
}

/// Fetch failure notice with a retry button.
#[component]
pub fn FetchError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "status-panel status-error",
            h2 { "Something went wrong" }
            p { "{message}" }
            button {
                class: "retry-button",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
