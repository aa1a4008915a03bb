use crate::error::{FacturierError, Result};
use crate::model::{AppState, DocBody, DocStatus, DocType, Document, LineItem, TVA_RATE};
use crate::numbering;
use chrono::Local;
use uuid::Uuid;

/// Replacement fields for an edit. `id`, `number` and `date` are assigned
/// at creation and are never part of a patch.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPatch {
    pub client_id: Uuid,
    pub body: DocBody,
    pub items: Vec<LineItem>,
    pub status: DocStatus,
}

/// Create a document for `client_id`. The number comes from the live count
/// of same-type documents, the date is today, and all derived amounts are
/// recomputed before the document enters the aggregate.
pub fn create(
    state: &AppState,
    client_id: Uuid,
    body: DocBody,
    items: Vec<LineItem>,
    status: DocStatus,
) -> Result<(AppState, Document)> {
    if state.client(client_id).is_none() {
        return Err(FacturierError::Validation(
            "select a client before saving the document".to_string(),
        ));
    }

    let doc_type = body.doc_type();
    let count = state.count_of_type(doc_type);
    let mut document = Document {
        id: Uuid::new_v4(),
        client_id,
        number: numbering::next_number(doc_type, count),
        date: Local::now().date_naive(),
        items,
        subtotal: 0.0,
        tva: TVA_RATE,
        total: 0.0,
        status,
        body,
    };
    document.recompute_totals();

    let mut next = state.clone();
    next.documents.push(document.clone());
    Ok((next, document))
}

/// Replace everything except `id`, `number` and `date`, recomputing totals
/// from the supplied items. The client reference must resolve, same as on
/// creation.
pub fn update(state: &AppState, id: Uuid, patch: DocumentPatch) -> Result<(AppState, Document)> {
    let mut next = state.clone();
    let document = next
        .documents
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or(FacturierError::DocumentNotFound(id))?;
    if state.client(patch.client_id).is_none() {
        return Err(FacturierError::Validation(
            "select a client before saving the document".to_string(),
        ));
    }
    document.client_id = patch.client_id;
    document.body = patch.body;
    document.items = patch.items;
    document.status = patch.status;
    document.recompute_totals();
    let updated = document.clone();
    Ok((next, updated))
}

/// Idempotent removal: deleting an id that is already gone is a no-op.
/// Returns whether a document was actually removed.
pub fn delete(state: &AppState, id: Uuid) -> (AppState, bool) {
    let mut next = state.clone();
    let before = next.documents.len();
    next.documents.retain(|d| d.id != id);
    let removed = next.documents.len() < before;
    (next, removed)
}

pub fn of_type(state: &AppState, doc_type: DocType) -> impl Iterator<Item = &Document> {
    state
        .documents
        .iter()
        .filter(move |d| d.doc_type() == doc_type)
}

/// Search within one document type: matches the number or the resolved
/// client name, case-insensitively. A document whose client reference
/// dangles only matches on its number.
pub fn find<'a>(state: &'a AppState, doc_type: DocType, query: &str) -> Vec<&'a Document> {
    let lowered = query.to_lowercase();
    of_type(state, doc_type)
        .filter(|d| {
            if lowered.is_empty() {
                return true;
            }
            if d.number.to_lowercase().contains(&lowered) {
                return true;
            }
            state
                .client(d.client_id)
                .is_some_and(|c| c.name.to_lowercase().contains(&lowered))
        })
        .collect()
}
