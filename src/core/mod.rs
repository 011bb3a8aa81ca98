//! Core business logic - framework-agnostic operations over the car store.
//!
//! Every operation takes the data store as an explicit `ConnectionTrait`
//! argument and returns a typed result that the web layer renders.

/// Creating listings and looking them up
pub mod car;
/// Paginated public listing of approved cars
pub mod listing;
/// Staff approval and rejection of pending cars
pub mod moderation;
/// Distinct-value lists for filter dropdowns
pub mod options;
/// Page-number resolution and page fetching
pub mod pagination;
/// Filtered search across all cars
pub mod search;
