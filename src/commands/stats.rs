use crate::model::{AppState, Client, DocType, Document};

/// Dashboard counters: the client directory size and the volume of the
/// three document types the overview screen tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub clients: usize,
    pub devis: usize,
    pub factures: usize,
    pub contrats: usize,
}

pub fn overview(state: &AppState) -> Overview {
    Overview {
        clients: state.clients.len(),
        devis: state.count_of_type(DocType::Devis),
        factures: state.count_of_type(DocType::Facture),
        contrats: state.count_of_type(DocType::Contrat),
    }
}

/// Newest first. Documents carry no created-at beyond their issue date, so
/// reverse insertion order stands in for recency.
pub fn recent_documents(state: &AppState, limit: usize) -> Vec<&Document> {
    state.documents.iter().rev().take(limit).collect()
}

pub fn recent_clients(state: &AppState, limit: usize) -> Vec<&Client> {
    state.clients.iter().rev().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StateFixture;

    #[test]
    fn overview_counts_per_type() {
        let fixture = StateFixture::new()
            .with_client("ACME")
            .with_document(DocType::Devis)
            .with_document(DocType::Devis)
            .with_document(DocType::Facture)
            .with_document(DocType::Garantie)
            .with_client("Bureau Nord");

        let counts = overview(&fixture.state);
        assert_eq!(counts.clients, 2);
        assert_eq!(counts.devis, 2);
        assert_eq!(counts.factures, 1);
        // Warranty certificates are not on the dashboard.
        assert_eq!(counts.contrats, 0);
    }

    #[test]
    fn recents_are_newest_first_and_capped() {
        let fixture = StateFixture::new()
            .with_client("A")
            .with_document(DocType::Devis)
            .with_document(DocType::Facture)
            .with_document(DocType::Recu);

        let recent = recent_documents(&fixture.state, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].doc_type(), DocType::Recu);
        assert_eq!(recent[1].doc_type(), DocType::Facture);

        assert!(recent_documents(&fixture.state, 10).len() == 3);
        assert_eq!(recent_clients(&fixture.state, 5)[0].name, "A");
    }
}
