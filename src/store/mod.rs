//! # Storage Layer
//!
//! The [`StateStore`] trait abstracts where the aggregate lives. It is
//! deliberately tiny: the aggregate is the unit of persistence, so the only
//! operations are loading it and replacing it wholesale. There are no
//! partial writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed `db.json`
//!   under a configurable root directory.
//! - [`memory::InMemoryStore`]: testing storage that still round-trips
//!   through JSON, so serialization bugs surface in unit tests.
//!
//! ## Bootstrap Policy
//!
//! A store with no prior state builds the default aggregate (empty
//! collections, the fixed default [`crate::model::CompanySettings`]),
//! durably saves it, and returns it — first run leaves a valid database
//! behind. A store whose state exists but fails to parse reports
//! [`FacturierError::CorruptState`]; startup code that prefers recovery over
//! aborting goes through [`load_or_bootstrap`].

use crate::error::{FacturierError, Result};
use crate::model::AppState;

pub mod fs;
pub mod memory;

/// Abstract interface for aggregate storage.
pub trait StateStore {
    /// Load the aggregate, bootstrapping and persisting the default one when
    /// no prior state exists.
    fn load(&mut self) -> Result<AppState>;

    /// Replace the entire persisted aggregate.
    fn save(&mut self, state: &AppState) -> Result<()>;
}

/// Startup policy: a corrupt aggregate is replaced by a fresh default (and
/// persisted) instead of aborting. Every other failure propagates.
pub fn load_or_bootstrap<S: StateStore>(store: &mut S) -> Result<AppState> {
    match store.load() {
        Ok(state) => Ok(state),
        Err(FacturierError::CorruptState(_)) => {
            let state = AppState::default();
            store.save(&state)?;
            Ok(state)
        }
        Err(err) => Err(err),
    }
}
