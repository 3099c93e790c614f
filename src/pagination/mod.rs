//! Pagination module
//!
//! Drives token-paginated operations to completion.
//!
//! # Overview
//!
//! Every list/describe operation shares one loop: send a request carrying the
//! current continuation token, hand the page's items to the consumer, then
//! stop when the item limit is met, when a limited iteration has fetched
//! nothing, or when the service stops returning a token. Operations opt in by
//! implementing [`PageRequest`] and [`PageResponse`].

mod fetch;
mod types;

pub use fetch::{paginate, paginate_pages, ItemIter, PageIter};
pub use types::{
    IterationState, Page, PageOptions, PageRequest, PageResponse, StopReason, StopResult,
};
