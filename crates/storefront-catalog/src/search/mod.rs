//! Category listing: filters, sorting, pagination.

mod filter;
mod query;
mod results;

pub use filter::CategoryFilter;
pub use query::{CategoryQuery, CategorySort, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use results::{Page, Pagination};
