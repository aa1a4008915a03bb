//! # API Facade
//!
//! [`Facturier`] is the single entry point for all operations, regardless of
//! the UI wired on top. It owns the one mutable aggregate reference and the
//! store, and runs every mutation the same way:
//!
//! 1. hand the current aggregate to a pure command in [`crate::commands`],
//! 2. persist the returned aggregate through the [`StateStore`],
//! 3. commit it in memory only after the write succeeded.
//!
//! A failed command or a failed write therefore leaves both the in-memory
//! and the durable state exactly as they were — there is no partial-success
//! state to observe, including for the cascade delete.
//!
//! ## Generic Over StateStore
//!
//! `Facturier<S: StateStore>` works against any storage backend:
//! `Facturier<FileStore>` in production, `Facturier<InMemoryStore>` in
//! tests.

use crate::commands::{self, clients::ClientFields, documents::DocumentPatch, stats::Overview};
use crate::error::Result;
use crate::model::{
    AppState, Client, CompanySettings, DocBody, DocStatus, DocType, Document, LineItem,
};
use crate::projection::{self, DocumentView};
use crate::store::{self, StateStore};
use uuid::Uuid;

pub struct Facturier<S: StateStore> {
    store: S,
    state: AppState,
}

impl<S: StateStore> Facturier<S> {
    /// Load the aggregate and take ownership of the store. First run
    /// bootstraps the default aggregate; a corrupt aggregate is replaced by
    /// a fresh default rather than aborting startup.
    pub fn open(mut store: S) -> Result<Self> {
        let state = store::load_or_bootstrap(&mut store)?;
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Give the store back, e.g. to reopen later.
    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: AppState) -> Result<()> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }

    // --- Client registry ---

    pub fn create_client(&mut self, fields: ClientFields) -> Result<Client> {
        let (next, client) = commands::clients::create(&self.state, fields);
        self.commit(next)?;
        Ok(client)
    }

    pub fn update_client(&mut self, id: Uuid, fields: ClientFields) -> Result<Client> {
        let (next, client) = commands::clients::update(&self.state, id, fields)?;
        self.commit(next)?;
        Ok(client)
    }

    /// Delete a client and every document referencing it. Returns the number
    /// of documents removed by the cascade.
    pub fn delete_client(&mut self, id: Uuid) -> Result<usize> {
        let (next, removed) = commands::clients::delete(&self.state, id);
        self.commit(next)?;
        Ok(removed)
    }

    pub fn find_clients(&self, query: &str) -> Vec<&Client> {
        commands::clients::find(&self.state, query).collect()
    }

    // --- Document ledger ---

    pub fn create_document(
        &mut self,
        client_id: Uuid,
        body: DocBody,
        items: Vec<LineItem>,
        status: DocStatus,
    ) -> Result<Document> {
        let (next, document) =
            commands::documents::create(&self.state, client_id, body, items, status)?;
        self.commit(next)?;
        Ok(document)
    }

    pub fn update_document(&mut self, id: Uuid, patch: DocumentPatch) -> Result<Document> {
        let (next, document) = commands::documents::update(&self.state, id, patch)?;
        self.commit(next)?;
        Ok(document)
    }

    pub fn delete_document(&mut self, id: Uuid) -> Result<bool> {
        let (next, removed) = commands::documents::delete(&self.state, id);
        self.commit(next)?;
        Ok(removed)
    }

    pub fn documents_of_type(&self, doc_type: DocType) -> Vec<&Document> {
        commands::documents::of_type(&self.state, doc_type).collect()
    }

    pub fn find_documents(&self, doc_type: DocType, query: &str) -> Vec<&Document> {
        commands::documents::find(&self.state, doc_type, query)
    }

    // --- Settings, stats, projections ---

    pub fn update_settings(&mut self, settings: CompanySettings) -> Result<()> {
        let next = commands::settings::update(&self.state, settings);
        self.commit(next)
    }

    pub fn overview(&self) -> Overview {
        commands::stats::overview(&self.state)
    }

    pub fn recent_documents(&self, limit: usize) -> Vec<&Document> {
        commands::stats::recent_documents(&self.state, limit)
    }

    pub fn recent_clients(&self, limit: usize) -> Vec<&Client> {
        commands::stats::recent_clients(&self.state, limit)
    }

    pub fn document_view(&self, id: Uuid) -> Result<DocumentView<'_>> {
        projection::document_view(&self.state, id)
    }
}
