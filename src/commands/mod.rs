//! Pure operations over the aggregate.
//!
//! Each mutating function takes the current [`crate::model::AppState`] by
//! reference and returns a **new** aggregate plus the affected entity. No
//! function here touches storage; persisting the returned aggregate (and
//! only then committing it) is the job of [`crate::api::Facturier`]. That
//! split keeps every operation atomic from the caller's perspective: either
//! the whole new aggregate lands, or nothing changed.

pub mod clients;
pub mod documents;
pub mod settings;
pub mod stats;
