//! Read-only projections for the print layer.
//!
//! The print layer renders a fixed layout (company header, client block,
//! item table, tax breakdown, stamp area, legal footer) from one joined
//! view. The core guarantees the view is internally consistent — totals
//! match items, the client either resolves or is explicitly absent — and
//! does no layout of its own.

use crate::error::{FacturierError, Result};
use crate::model::{AppState, Client, CompanySettings, Document};
use uuid::Uuid;

/// A document joined with its client and the company settings. The client
/// is `None` only when the reference dangles; the print layer renders an
/// empty client block in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView<'a> {
    pub document: &'a Document,
    pub client: Option<&'a Client>,
    pub settings: &'a CompanySettings,
}

impl DocumentView<'_> {
    /// Suggested file name for the printed copy: the document number,
    /// followed by the client name when it resolves.
    pub fn file_name(&self) -> String {
        match self.client {
            Some(client) => format!("{} - {}", self.document.number, client.name),
            None => self.document.number.clone(),
        }
    }

    /// Bilingual heading for the printed page.
    pub fn title(&self) -> &'static str {
        self.document.doc_type().print_title()
    }
}

pub fn document_view(state: &AppState, id: Uuid) -> Result<DocumentView<'_>> {
    let document = state
        .document(id)
        .ok_or(FacturierError::DocumentNotFound(id))?;
    Ok(DocumentView {
        document,
        client: state.client(document.client_id),
        settings: &state.settings,
    })
}
