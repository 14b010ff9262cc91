pub mod models;
pub mod table;

pub use models::{Address, Company, Geo, User};
pub use table::{Roster, SortColumn, SortDirection, ITEMS_PER_PAGE};
