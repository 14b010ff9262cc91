use dioxus::prelude::*;

/// Pager for the user table: previous/next plus a direct button per page.
///
/// Previous/next are disabled at the edges; the page buttons jump without
/// bounds checks, matching the table state they drive.
#[component]
pub fn Pagination(
    pages: Vec<usize>,
    current_page: usize,
    has_previous: bool,
    has_next: bool,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_go_to: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            button {
                class: "page-button",
                disabled: !has_previous,
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            for page in pages {
                button {
                    key: "{page}",
                    class: if page == current_page { "page-button active" } else { "page-button" },
                    onclick: move |_| on_go_to.call(page),
                    "{page}"
                }
            }
            button {
                class: "page-button",
                disabled: !has_next,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
