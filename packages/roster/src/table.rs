//! In-memory table state for the user list view.
//!
//! [`Roster`] holds the full fetched record set and a derived filtered copy,
//! and recomputes the derived view on every filter, sort, or page action.
//! Filtering rebuilds the derived set from the full set in server order and
//! resets pagination to page 1; sorting reorders the derived set in place and
//! leaves the current page alone.

use crate::models::User;

/// Rows shown per page.
pub const ITEMS_PER_PAGE: usize = 10;

/// A sortable column of the user table. Only the three displayed text
/// columns are sortable, so there is no non-string case to no-op on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Username,
    Email,
}

impl SortColumn {
    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
        }
    }

    fn key(self, user: &User) -> &str {
        match self {
            Self::Name => &user.name,
            Self::Username => &user.username,
            Self::Email => &user.email,
        }
    }
}

/// Sort direction. One flag for the whole table, shared across columns:
/// every sort action toggles it first, then applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// List view state: the full fetched set plus the derived filtered view,
/// sort state, and the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    all: Vec<User>,
    filtered: Vec<User>,
    current_page: usize,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            current_page: 1,
            sort_column: None,
            sort_direction: SortDirection::default(),
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record set with a fresh fetch result.
    pub fn load(&mut self, users: Vec<User>) {
        self.filtered = users.clone();
        self.all = users;
        self.current_page = 1;
    }

    /// Keep the records whose name, username, or email contains `query`
    /// case-insensitively. Rebuilds the derived set from the full set in
    /// server order (discarding any prior sort order) and resets pagination
    /// to page 1. An empty query restores the full set.
    pub fn apply_filter(&mut self, query: &str) {
        let needle = query.trim().to_lowercase();
        self.filtered = self
            .all
            .iter()
            .filter(|user| {
                user.name.to_lowercase().contains(&needle)
                    || user.username.to_lowercase().contains(&needle)
                    || user.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        self.current_page = 1;
    }

    /// Sort the derived set by `column`, toggling the shared direction flag
    /// first. The current page is not reset; the page count is derived and
    /// shrinks or grows on its own.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort_column = Some(column);
        self.sort_direction = self.sort_direction.toggled();
        let direction = self.sort_direction;
        self.filtered.sort_by(|a, b| {
            let ordering = column
                .key(a)
                .to_lowercase()
                .cmp(&column.key(b).to_lowercase());
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(ITEMS_PER_PAGE)
    }

    /// Page numbers for the pager, `1..=page_count`.
    pub fn pages(&self) -> Vec<usize> {
        (1..=self.page_count()).collect()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Whether the derived set has no records (nothing matched the filter,
    /// or nothing has been loaded yet).
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// The slice of the derived set visible on the current page.
    /// An out-of-range page yields an empty or truncated slice.
    pub fn visible(&self) -> &[User] {
        let Some(start) = self
            .current_page
            .checked_sub(1)
            .map(|page| page * ITEMS_PER_PAGE)
        else {
            return &[];
        };
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + ITEMS_PER_PAGE).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Jump straight to `page`. No bounds check: an out-of-range page shows
    /// an empty slice until the user navigates back.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Step back one page; no-op on page 1.
    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    /// Step forward one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }
}
