use dioxus::prelude::*;

/// Free-text filter input for the user table. Emits the raw input value on
/// every keystroke; the caller owns the filtering.
#[component]
pub fn SearchBox(
    #[props(default = "Filter by name, username, or email".to_string())] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            class: "search-box",
            r#type: "text",
            placeholder: "{placeholder}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}
