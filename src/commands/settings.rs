use crate::model::{AppState, CompanySettings};

/// Settings edits replace the whole record, exactly as the settings screen
/// submits it.
pub fn update(state: &AppState, settings: CompanySettings) -> AppState {
    let mut next = state.clone();
    next.settings = settings;
    next
}
