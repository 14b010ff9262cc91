use dioxus::prelude::*;

use roster::User;
use ui::{FetchError, LoadingIndicator};

use crate::Route;

const USERS_CSS: Asset = asset!("/assets/users.css");

#[component]
pub fn UserDetail(id: u32) -> Element {
    // Track the route param in a signal so use_resource re-runs on change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut user = use_signal(|| Option::<User>::None);
    let mut is_loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || {
        let id = id_signal();
        async move {
            is_loading.set(true);
            load_error.set(None);
            match api::get_user(id).await {
                Ok(record) => user.set(Some(record)),
                Err(e) => {
                    tracing::error!("Failed to load user {}: {}", id, e);
                    load_error.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        }
    });

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "user-detail",
            Link {
                class: "back-link",
                to: Route::UserList {},
                "Back to all users"
            }

            if is_loading() {
                LoadingIndicator { message: "Loading user...".to_string() }
            } else {
                if let Some(error) = load_error() {
                    FetchError {
                        message: error,
                        on_retry: move |_| loader.restart(),
                    }
                } else {
                    if let Some(record) = user() {
                        UserCard { record }
                    }
                }
            }
        }
    }
}

#[component]
fn UserCard(record: User) -> Element {
    rsx! {
        div {
            class: "detail-card",
            h1 { "{record.name}" }
            p {
                class: "detail-subtitle",
                "@{record.username}"
            }

            dl {
                class: "detail-fields",
                dt { "Email" }
                dd {
                    a { href: "mailto:{record.email}", "{record.email}" }
                }
                if let Some(phone) = record.phone.as_ref() {
                    dt { "Phone" }
                    dd { "{phone}" }
                }
                if let Some(website) = record.website.as_ref() {
                    dt { "Website" }
                    dd {
                        a { href: "https://{website}", "{website}" }
                    }
                }
                if let Some(address) = record.address.as_ref() {
                    dt { "Address" }
                    dd { "{address.street}, {address.suite}, {address.city} {address.zipcode}" }
                }
                if let Some(company) = record.company.as_ref() {
                    dt { "Company" }
                    dd {
                        span { class: "company-name", "{company.name}" }
                        span { class: "company-phrase", "{company.catch_phrase}" }
                    }
                }
            }
        }
    }
}
