//! Services orchestrating the data fetches behind each page.
//!
//! Both services share one policy: a failed fetch step is logged and
//! degraded to an empty value, never propagated to the page.

mod detail_service;
mod listing_service;

pub use detail_service::{CharacterDetail, DetailService, HISTORY_LIMIT};
pub use listing_service::ListingService;
