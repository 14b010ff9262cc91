use dioxus::prelude::*;

use roster::{SortColumn, SortDirection, User};

/// Sortable table over one page of users. Clicking a header sorts by that
/// column; clicking a row selects the user.
#[component]
pub fn UserTable(
    users: Vec<User>,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
    on_sort: EventHandler<SortColumn>,
    on_select: EventHandler<u32>,
) -> Element {
    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    for column in [SortColumn::Name, SortColumn::Username, SortColumn::Email] {
                        th {
                            class: "sortable",
                            onclick: move |_| on_sort.call(column),
                            "{column.label()}"
                            if sort_column == Some(column) {
                                span {
                                    class: "sort-indicator",
                                    if sort_direction == SortDirection::Ascending {
                                        "▲"
                                    } else {
                                        "▼"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            tbody {
                for user in users {
                    UserRow { user, on_select }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_select: EventHandler<u32>) -> Element {
    let id = user.id;
    rsx! {
        tr {
            class: "user-row",
            onclick: move |_| on_select.call(id),
            td { "{user.name}" }
            td { "{user.username}" }
            td { "{user.email}" }
        }
    }
}
