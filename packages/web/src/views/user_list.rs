use dioxus::prelude::*;

use roster::Roster;
use ui::{FetchError, LoadingIndicator, Pagination, SearchBox, UserTable};

use crate::Route;

const USERS_CSS: Asset = asset!("/assets/users.css");

#[component]
pub fn UserList() -> Element {
    let mut roster = use_signal(Roster::new);
    let mut is_loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    // Fetch the full directory once on mount; retry restarts the resource.
    let mut loader = use_resource(move || async move {
        is_loading.set(true);
        load_error.set(None);
        match api::get_users().await {
            Ok(users) => roster.write().load(users),
            Err(e) => {
                tracing::error!("Failed to load users: {}", e);
                load_error.set(Some(e.to_string()));
            }
        }
        is_loading.set(false);
    });

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "user-list",
            h1 { "Users" }

            if is_loading() {
                LoadingIndicator { message: "Loading users...".to_string() }
            } else {
                if let Some(error) = load_error() {
                    FetchError {
                        message: error,
                        on_retry: move |_| loader.restart(),
                    }
                } else {
                    SearchBox {
                        on_input: move |query: String| roster.write().apply_filter(&query),
                    }

                    UserTable {
                        users: roster.read().visible().to_vec(),
                        sort_column: roster.read().sort_column(),
                        sort_direction: roster.read().sort_direction(),
                        on_sort: move |column| roster.write().sort_by(column),
                        on_select: move |id| {
                            nav.push(Route::UserDetail { id });
                        },
                    }

                    if roster.read().is_empty() {
                        p {
                            class: "empty-note",
                            "No users match the current filter."
                        }
                    }

                    Pagination {
                        pages: roster.read().pages(),
                        current_page: roster.read().current_page(),
                        has_previous: roster.read().has_previous(),
                        has_next: roster.read().has_next(),
                        on_previous: move |_| roster.write().previous_page(),
                        on_next: move |_| roster.write().next_page(),
                        on_go_to: move |page| roster.write().go_to_page(page),
                    }
                }
            }
        }
    }
}
