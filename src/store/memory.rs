use super::StateStore;
use crate::error::{FacturierError, Result};
use crate::model::AppState;

/// In-memory store keeping the *serialized* form, so every load/save goes
/// through the same JSON round-trip as the file store and serialization
/// bugs surface in unit tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    raw: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self { raw: None }
    }

    /// Replace the stored payload with garbage, for tests of the
    /// corrupt-state fallback.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn poison(&mut self) {
        self.raw = Some("{ not json".to_string());
    }
}

impl StateStore for InMemoryStore {
    fn load(&mut self) -> Result<AppState> {
        match &self.raw {
            None => {
                let state = AppState::default();
                self.save(&state)?;
                Ok(state)
            }
            Some(raw) => serde_json::from_str(raw).map_err(FacturierError::CorruptState),
        }
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.raw = Some(serde_json::to_string(state)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::commands::{clients, documents};
    use crate::model::{AppState, Client, DocBody, DocStatus, DocType, LineItem};
    use uuid::Uuid;

    /// Builder for aggregate values used across tests. Everything goes
    /// through the real commands so fixtures exercise the same paths as
    /// production code.
    #[derive(Debug, Default)]
    pub struct StateFixture {
        pub state: AppState,
    }

    impl StateFixture {
        pub fn new() -> Self {
            Self {
                state: AppState::default(),
            }
        }

        pub fn with_client(mut self, name: &str) -> Self {
            let fields = clients::ClientFields {
                name: name.to_string(),
                ice: "000111222333444".to_string(),
                phone: "0600000000".to_string(),
                email: "client@example.ma".to_string(),
                address: "Rue 1".to_string(),
                city: "Casablanca".to_string(),
            };
            let (state, _) = clients::create(&self.state, fields);
            self.state = state;
            self
        }

        /// A document of `doc_type` for the most recently added client,
        /// with one 2 × 100 line item.
        pub fn with_document(mut self, doc_type: DocType) -> Self {
            let client_id = self.last_client_id();
            let items = vec![LineItem::with_values("Service", 2.0, 100.0)];
            let (state, _) = documents::create(
                &self.state,
                client_id,
                DocBody::empty(doc_type),
                items,
                DocStatus::Draft,
            )
            .expect("fixture document");
            self.state = state;
            self
        }

        pub fn last_client(&self) -> &Client {
            self.state.clients.last().expect("fixture has no client")
        }

        pub fn last_client_id(&self) -> Uuid {
            self.last_client().id
        }
    }
}
