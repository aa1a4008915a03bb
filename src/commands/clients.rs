use crate::error::{FacturierError, Result};
use crate::model::{AppState, Client};
use chrono::Utc;
use uuid::Uuid;

/// The editable fields of a client. Identity and creation time stay with
/// the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientFields {
    pub name: String,
    pub ice: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
}

pub fn create(state: &AppState, fields: ClientFields) -> (AppState, Client) {
    let client = Client {
        id: Uuid::new_v4(),
        name: fields.name,
        ice: fields.ice,
        phone: fields.phone,
        email: fields.email,
        address: fields.address,
        city: fields.city,
        created_at: Utc::now(),
    };
    let mut next = state.clone();
    next.clients.push(client.clone());
    (next, client)
}

pub fn update(state: &AppState, id: Uuid, fields: ClientFields) -> Result<(AppState, Client)> {
    let mut next = state.clone();
    let client = next
        .clients
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(FacturierError::ClientNotFound(id))?;
    client.name = fields.name;
    client.ice = fields.ice;
    client.phone = fields.phone;
    client.email = fields.email;
    client.address = fields.address;
    client.city = fields.city;
    let updated = client.clone();
    Ok((next, updated))
}

/// Remove the client and every document that references it, as one new
/// aggregate. Returns how many documents went with it. Deleting an unknown
/// id is a no-op.
pub fn delete(state: &AppState, id: Uuid) -> (AppState, usize) {
    let mut next = state.clone();
    next.clients.retain(|c| c.id != id);
    let before = next.documents.len();
    next.documents.retain(|d| d.client_id != id);
    let removed = before - next.documents.len();
    (next, removed)
}

/// Directory search: case-insensitive substring on the name, plain
/// substring on the fiscal id and phone. Lazy, order-preserving,
/// non-destructive.
pub fn find<'a>(state: &'a AppState, query: &str) -> impl Iterator<Item = &'a Client> {
    let lowered = query.to_lowercase();
    let raw = query.to_string();
    state.clients.iter().filter(move |c| {
        c.name.to_lowercase().contains(&lowered) || c.ice.contains(&raw) || c.phone.contains(&raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocType;
    use crate::store::memory::fixtures::StateFixture;

    fn fields(name: &str) -> ClientFields {
        ClientFields {
            name: name.to_string(),
            ice: "001552233".to_string(),
            phone: "0611223344".to_string(),
            email: "a@a.com".to_string(),
            address: "Rue 1".to_string(),
            city: "Casablanca".to_string(),
        }
    }

    #[test]
    fn create_appends_with_fresh_identity() {
        let state = AppState::default();
        let (state, first) = create(&state, fields("ACME"));
        let (state, second) = create(&state, fields("Bureau Nord"));

        assert_eq!(state.clients.len(), 2);
        assert_ne!(first.id, second.id);
        assert_eq!(state.clients[0].name, "ACME");
        assert_eq!(state.clients[1].name, "Bureau Nord");
    }

    #[test]
    fn create_does_not_touch_the_input_aggregate() {
        let state = AppState::default();
        let (next, _) = create(&state, fields("ACME"));
        assert!(state.clients.is_empty());
        assert_eq!(next.clients.len(), 1);
    }

    #[test]
    fn update_replaces_fields_but_keeps_identity() {
        let fixture = StateFixture::new().with_client("ACME");
        let original = fixture.last_client().clone();

        let (state, updated) =
            update(&fixture.state, original.id, fields("ACME Maroc")).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "ACME Maroc");
        assert_eq!(state.client(original.id).unwrap().name, "ACME Maroc");
    }

    #[test]
    fn update_unknown_client_is_not_found() {
        let state = AppState::default();
        let id = Uuid::new_v4();
        match update(&state, id, fields("ghost")) {
            Err(FacturierError::ClientNotFound(err_id)) => assert_eq!(err_id, id),
            other => panic!("expected ClientNotFound, got {:?}", other),
        }
    }

    #[test]
    fn delete_cascades_to_all_referencing_documents() {
        let fixture = StateFixture::new()
            .with_client("ACME")
            .with_document(DocType::Devis)
            .with_document(DocType::Facture)
            .with_client("Bureau Nord")
            .with_document(DocType::Contrat);
        let acme_id = fixture.state.clients[0].id;

        let (state, removed) = delete(&fixture.state, acme_id);

        assert_eq!(removed, 2);
        assert!(state.client(acme_id).is_none());
        assert!(state.documents.iter().all(|d| d.client_id != acme_id));
        // The other client's documents survive.
        assert_eq!(state.documents.len(), 1);
        assert_eq!(state.documents[0].doc_type(), DocType::Contrat);
    }

    #[test]
    fn delete_unknown_client_is_a_noop() {
        let fixture = StateFixture::new().with_client("ACME");
        let (state, removed) = delete(&fixture.state, Uuid::new_v4());
        assert_eq!(removed, 0);
        assert_eq!(state, fixture.state);
    }

    #[test]
    fn find_matches_name_case_insensitively() {
        let fixture = StateFixture::new()
            .with_client("ACME Industrie")
            .with_client("Bureau Nord");

        let hits: Vec<_> = find(&fixture.state, "acme").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ACME Industrie");
    }

    #[test]
    fn find_matches_ice_and_phone_substrings() {
        let state = AppState::default();
        let (state, _) = create(
            &state,
            ClientFields {
                name: "Atelier Sud".to_string(),
                ice: "998877".to_string(),
                phone: "0522334455".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(find(&state, "9988").count(), 1);
        assert_eq!(find(&state, "2233").count(), 1);
        assert_eq!(find(&state, "zzz").count(), 0);
    }

    #[test]
    fn find_preserves_directory_order() {
        let fixture = StateFixture::new()
            .with_client("Garage Alpha")
            .with_client("Garage Beta");

        let names: Vec<_> = find(&fixture.state, "garage").map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Garage Alpha", "Garage Beta"]);
        // Searching never mutates the directory.
        assert_eq!(fixture.state.clients.len(), 2);
    }
}
